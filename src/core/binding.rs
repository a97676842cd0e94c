use crate::core::parser::parse_segments;
use crate::domain::model::{PackageIdentity, PathSegments};
use crate::domain::ports::RouteSource;
use crate::utils::error::{Result, RouteError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

struct Memo {
    segments: PathSegments,
    identity: Arc<PackageIdentity>,
}

struct BindingState {
    receiver: watch::Receiver<PathSegments>,
    memo: Option<Memo>,
    recomputations: usize,
}

/// Parsed package identity of the router's current segments.
///
/// Pull based: every read looks at the latest segments the router published and
/// re-parses only when they differ from the ones the cached identity came from.
/// Both name and version are always read from the same snapshot.
pub struct PackageRouteBinding {
    state: Mutex<BindingState>,
    // Separate receiver for `changed()` so waiting never holds the state lock.
    notifier: watch::Receiver<PathSegments>,
}

impl PackageRouteBinding {
    pub fn new(receiver: watch::Receiver<PathSegments>) -> Self {
        Self {
            notifier: receiver.clone(),
            state: Mutex::new(BindingState {
                receiver,
                memo: None,
                recomputations: 0,
            }),
        }
    }

    pub fn from_source<R: RouteSource + ?Sized>(source: &R) -> Self {
        Self::new(source.subscribe())
    }

    fn lock(&self) -> MutexGuard<'_, BindingState> {
        // Parsing cannot panic midway through an update, so a poisoned state is still consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn identity(&self) -> Arc<PackageIdentity> {
        let mut guard = self.lock();
        let BindingState {
            receiver,
            memo,
            recomputations,
        } = &mut *guard;

        let current = receiver.borrow_and_update();
        if let Some(memo) = memo.as_ref() {
            if memo.segments == *current {
                return Arc::clone(&memo.identity);
            }
        }

        let segments = current.clone();
        drop(current);

        let identity = Arc::new(parse_segments(&segments));
        *recomputations += 1;
        tracing::debug!(
            segments = ?segments,
            identity = %identity,
            "package route recomputed"
        );

        *memo = Some(Memo {
            segments,
            identity: Arc::clone(&identity),
        });
        identity
    }

    pub fn package_name(&self) -> String {
        self.identity().package_name.clone()
    }

    pub fn requested_version(&self) -> Option<String> {
        self.identity().requested_version.clone()
    }

    /// How many times the identity has been parsed so far.
    pub fn recomputations(&self) -> usize {
        self.lock().recomputations
    }

    /// Waits until the router publishes a new segment sequence.
    pub async fn changed(&mut self) -> Result<()> {
        self.notifier
            .changed()
            .await
            .map_err(|_| RouteError::RouterClosed)
    }
}

/// Read-only view of one projection of a shared [`PackageRouteBinding`].
pub struct Derived<T> {
    binding: Arc<PackageRouteBinding>,
    notifier: watch::Receiver<PathSegments>,
    project: fn(&PackageIdentity) -> T,
}

impl<T> Derived<T> {
    pub fn get(&self) -> T {
        (self.project)(&self.binding.identity())
    }

    pub async fn changed(&mut self) -> Result<()> {
        self.notifier
            .changed()
            .await
            .map_err(|_| RouteError::RouterClosed)
    }
}

impl<T> Clone for Derived<T> {
    fn clone(&self) -> Self {
        Self {
            binding: Arc::clone(&self.binding),
            notifier: self.notifier.clone(),
            project: self.project,
        }
    }
}

/// Derived values exposed to page code.
#[derive(Clone)]
pub struct PackageRoute {
    pub package_name: Derived<String>,
    pub requested_version: Derived<Option<String>>,
    binding: Arc<PackageRouteBinding>,
}

impl PackageRoute {
    /// Name and version from one snapshot.
    pub fn identity(&self) -> Arc<PackageIdentity> {
        self.binding.identity()
    }

    pub fn binding(&self) -> &PackageRouteBinding {
        &self.binding
    }
}

/// Binds to the router's current package segments.
pub fn use_package_route<R: RouteSource + ?Sized>(source: &R) -> PackageRoute {
    let binding = Arc::new(PackageRouteBinding::from_source(source));
    let notifier = binding.notifier.clone();

    PackageRoute {
        package_name: Derived {
            binding: Arc::clone(&binding),
            notifier: notifier.clone(),
            project: |identity| identity.package_name.clone(),
        },
        requested_version: Derived {
            binding: Arc::clone(&binding),
            notifier,
            project: |identity| identity.requested_version.clone(),
        },
        binding,
    }
}
