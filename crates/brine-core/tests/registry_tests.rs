use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use brine_core::lazy::LazyCache;
use brine_core::registry;
use brine_core::types::BrineError;

#[test]
fn concurrent_first_access_constructs_exactly_once() {
    static CACHE: LazyCache<u64> = LazyCache::new();
    static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

    let threads = 16;
    let barrier = Arc::new(Barrier::new(threads));
    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                CACHE
                    .get_or_init(|| {
                        CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
                        Ok(0xC0FFEE)
                    })
                    .unwrap()
            })
        })
        .collect();

    let instances: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(CONSTRUCTIONS.load(Ordering::SeqCst), 1);
    for instance in &instances {
        assert!(Arc::ptr_eq(instance, &instances[0]));
        assert_eq!(**instance, 0xC0FFEE);
    }
}

#[test]
fn transient_failure_is_retried() {
    static CACHE: LazyCache<u64> = LazyCache::new();
    static ATTEMPTS: AtomicUsize = AtomicUsize::new(0);

    let first = CACHE.get_or_init(|| {
        ATTEMPTS.fetch_add(1, Ordering::SeqCst);
        Err(BrineError::Native { op: "flaky ctor" })
    });
    assert_eq!(first, Err(BrineError::Native { op: "flaky ctor" }));

    let second = CACHE
        .get_or_init(|| {
            ATTEMPTS.fetch_add(1, Ordering::SeqCst);
            Ok(7)
        })
        .unwrap();
    assert_eq!(*second, 7);
    assert_eq!(ATTEMPTS.load(Ordering::SeqCst), 2);
}

#[test]
fn unavailable_is_cached_terminally() {
    static CACHE: LazyCache<u64> = LazyCache::new();
    static ATTEMPTS: AtomicUsize = AtomicUsize::new(0);

    let unavailable = BrineError::Unavailable {
        primitive: "missing instruction set",
    };
    let first = CACHE.get_or_init(|| {
        ATTEMPTS.fetch_add(1, Ordering::SeqCst);
        Err(unavailable)
    });
    assert_eq!(first, Err(unavailable));

    // The constructor must not run again; the cached indication is returned.
    let second = CACHE.get_or_init(|| {
        ATTEMPTS.fetch_add(1, Ordering::SeqCst);
        Ok(1)
    });
    assert_eq!(second, Err(unavailable));
    assert_eq!(ATTEMPTS.load(Ordering::SeqCst), 1);
}

#[test]
fn family_accessors_return_shared_instances() {
    let a = registry::secret_box().unwrap();
    let b = registry::secret_box().unwrap();
    assert!(Arc::ptr_eq(&a, &b));

    let a = registry::generic_hash().unwrap();
    let b = registry::generic_hash().unwrap();
    assert!(Arc::ptr_eq(&a, &b));

    let a = registry::aead().unwrap();
    let b = registry::aead().unwrap();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn concurrent_family_access_agrees() {
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));
    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry::sign().unwrap()
            })
        })
        .collect();

    let instances: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for instance in &instances {
        assert!(Arc::ptr_eq(instance, &instances[0]));
    }
}

#[test]
fn distinct_sessions_run_concurrently() {
    let gh = registry::generic_hash().unwrap();
    let input: Vec<u8> = (0u8..=255).collect();

    let mut reference = gh.stream(None, 32).unwrap();
    reference.update(&input).unwrap();
    let expected = reference.finalize_vec().unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let gh = Arc::clone(&gh);
            let input = input.clone();
            thread::spawn(move || {
                let mut stream = gh.stream(None, 32).unwrap();
                for chunk in input.chunks(17) {
                    stream.update(chunk).unwrap();
                }
                stream.finalize_vec().unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
