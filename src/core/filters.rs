use crate::models::Gender;

/// Check the mandatory gender rule for one student/mentor pairing
///
/// A set preference requires the mentor's gender to equal it exactly, so a
/// mentor of unknown gender never satisfies a `Male` or `Female` preference.
/// An unset preference passes every mentor.
#[inline]
pub fn satisfies_gender_preference(preference: Option<Gender>, mentor_gender: Gender) -> bool {
    match preference {
        Some(required) => mentor_gender == required,
        None => true,
    }
}
