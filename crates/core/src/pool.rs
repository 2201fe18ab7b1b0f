//! Generic thread-safe object pool with RAII guards.
//!
//! The hot logging path acquires one call record and one format buffer per
//! call. Both come from a [`Pool`], so steady-state logging performs no
//! allocation: objects are recycled through a mutex-protected free list and
//! handed out behind a guard that releases them on every exit path.

use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex};

/// A thread-safe pool of reusable objects.
///
/// The pool hands out either a freshly initialized object or a stale object
/// that was reset when it was returned. Callers that fully overwrite the
/// object before reading it (as record capture does) therefore never observe
/// contents from a previous use.
#[derive(Debug)]
pub struct Pool<T> {
    idle: Mutex<Vec<T>>,
    max_idle: usize,
    init: fn() -> T,
    reset: fn(&mut T),
}

impl<T: Default> Pool<T> {
    /// Creates a pool of default-initialized objects with a no-op reset.
    #[must_use]
    pub fn new(max_idle: usize) -> Self {
        Self::with_hooks(max_idle, T::default, |_| {})
    }
}

impl<T> Pool<T> {
    /// Creates a pool with explicit initialization and reset hooks.
    ///
    /// `init` builds a fresh object when the free list is empty. `reset` runs
    /// when an object is returned; for growable buffers it should clear the
    /// contents while keeping the allocation, so reuse never reallocates.
    #[must_use]
    pub fn with_hooks(max_idle: usize, init: fn() -> T, reset: fn(&mut T)) -> Self {
        Self {
            idle: Mutex::new(Vec::with_capacity(max_idle)),
            max_idle,
            init,
            reset,
        }
    }

    /// Acquires an object from the pool.
    ///
    /// The returned guard owns the object exclusively until it is dropped, at
    /// which point the object goes back on the free list.
    #[must_use]
    pub fn acquire(pool: Arc<Self>) -> PoolGuard<T> {
        let recycled = {
            let mut idle = pool.idle.lock().expect("pool mutex poisoned");
            idle.pop()
        };
        let object = recycled.unwrap_or_else(pool.init);

        PoolGuard {
            object: Some(object),
            pool,
        }
    }

    fn release(&self, mut object: T) {
        (self.reset)(&mut object);

        let mut idle = self.idle.lock().expect("pool mutex poisoned");
        if idle.len() < self.max_idle {
            idle.push(object);
        }
    }

    /// Returns the number of objects currently on the free list.
    #[must_use]
    pub fn idle_count(&self) -> usize {
        self.idle.lock().expect("pool mutex poisoned").len()
    }

    /// Returns the maximum number of idle objects the pool retains.
    #[must_use]
    pub const fn max_idle(&self) -> usize {
        self.max_idle
    }
}

/// RAII guard that returns the pooled object on drop.
#[derive(Debug)]
pub struct PoolGuard<T> {
    object: Option<T>,
    pool: Arc<Pool<T>>,
}

impl<T> PoolGuard<T> {
    /// Detaches the object from the pool, taking ownership of it.
    #[must_use]
    pub fn detach(mut self) -> T {
        self.object.take().expect("pooled object already taken")
    }
}

impl<T> Deref for PoolGuard<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.object.as_ref().expect("pooled object already taken")
    }
}

impl<T> DerefMut for PoolGuard<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.object.as_mut().expect("pooled object already taken")
    }
}

impl<T> Drop for PoolGuard<T> {
    fn drop(&mut self) {
        if let Some(object) = self.object.take() {
            self.pool.release(object);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn byte_pool(max_idle: usize) -> Arc<Pool<Vec<u8>>> {
        Arc::new(Pool::with_hooks(max_idle, Vec::new, Vec::clear))
    }

    #[test]
    fn acquire_hands_out_fresh_object_when_empty() {
        let pool = byte_pool(4);
        let buf = Pool::acquire(Arc::clone(&pool));
        assert!(buf.is_empty());
        assert_eq!(pool.idle_count(), 0);
    }

    #[test]
    fn released_objects_are_reset_and_reused() {
        let pool = byte_pool(4);

        {
            let mut buf = Pool::acquire(Arc::clone(&pool));
            buf.extend_from_slice(b"stale contents");
        }
        assert_eq!(pool.idle_count(), 1);

        let buf = Pool::acquire(Arc::clone(&pool));
        assert!(buf.is_empty());
        assert!(buf.capacity() >= b"stale contents".len());
        assert_eq!(pool.idle_count(), 0);
    }

    #[test]
    fn free_list_is_bounded() {
        let pool = byte_pool(2);

        let a = Pool::acquire(Arc::clone(&pool));
        let b = Pool::acquire(Arc::clone(&pool));
        let c = Pool::acquire(Arc::clone(&pool));
        drop(a);
        drop(b);
        drop(c);

        assert_eq!(pool.idle_count(), 2);
    }

    #[test]
    fn detach_skips_release() {
        let pool = byte_pool(4);
        let buf = Pool::acquire(Arc::clone(&pool));
        let owned = buf.detach();
        assert!(owned.is_empty());
        assert_eq!(pool.idle_count(), 0);
    }

    #[test]
    fn default_pool_uses_default_objects() {
        let pool: Arc<Pool<u64>> = Arc::new(Pool::new(1));
        let value = Pool::acquire(Arc::clone(&pool));
        assert_eq!(*value, 0);
    }

    #[test]
    fn concurrent_acquire_release() {
        let pool = byte_pool(8);
        let mut handles = Vec::new();

        for _ in 0..16 {
            let pool = Arc::clone(&pool);
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    let mut buf = Pool::acquire(Arc::clone(&pool));
                    buf.push(1);
                }
            }));
        }

        for handle in handles {
            handle.join().expect("thread panicked");
        }

        assert!(pool.idle_count() <= 8);
    }
}
