use rand::distributions::Slice;
use rand::{thread_rng, Rng};
use std::any::type_name;
use thiserror::Error;

use crate::enumeration::{all_values, Enumeration};

/// The enum has no members, so there is nothing to pick
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{type_name} has no members to choose from")]
pub struct EmptyEnumError {
    pub type_name: &'static str,
}

/// Pick a member of `T` uniformly at random using the thread-local generator
pub fn random_enum<T: Enumeration>() -> Result<T, EmptyEnumError> {
    random_enum_with(&mut thread_rng())
}

/// Pick a member of `T` uniformly at random using `rng`
pub fn random_enum_with<T, R>(rng: &mut R) -> Result<T, EmptyEnumError>
where
    T: Enumeration,
    R: Rng + ?Sized,
{
    let values = all_values::<T>();
    let dist = Slice::new(&values).map_err(|_| EmptyEnumError {
        type_name: type_name::<T>(),
    })?;

    let member = *rng.sample(dist);
    tracing::trace!("Picked {member} out of {} members", values.len());
    Ok(member)
}
