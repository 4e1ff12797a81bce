//! Lock used for engine state: the std mutex with poison recovery, or a spin
//! lock without `std`.

#[cfg(feature = "std")]
type Inner<T> = std::sync::Mutex<T>;
#[cfg(feature = "std")]
pub type MutexGuard<'a, T> = std::sync::MutexGuard<'a, T>;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Inner<T> = spin::Mutex<T>;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub type MutexGuard<'a, T> = spin::MutexGuard<'a, T>;

pub struct Mutex<T>(Inner<T>);

impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(Inner::new(value))
    }

    /// Locks, recovering the data if a panicking callback poisoned the lock.
    #[cfg(feature = "std")]
    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.0.lock()
    }
}
