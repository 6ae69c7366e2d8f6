use std::any::type_name;

/// Numeric cast between any two `num::NumCast` types.
///
/// Panics if the value cannot be represented in the target type.
#[must_use]
pub fn cast<T: num::NumCast>(a: impl num::NumCast) -> T {
    try_cast(a).unwrap_or_else(|| panic!("value not representable as `{}`", type_name::<T>()))
}

#[must_use]
pub fn try_cast<T: num::NumCast>(a: impl num::NumCast) -> Option<T> {
    T::from(a)
}
