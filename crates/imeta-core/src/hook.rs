use std::fmt;
use std::sync::Arc;

use crate::class::ClassDescriptor;

/// Called once per registered class, after conformance checking and
/// documentation composition, e.g. to record plugin implementations.
///
/// A hook declared on a class applies to that class and every descendant
/// that does not declare its own.
pub trait ImplementationHook: Send + Sync {
    fn register_implementation(&self, class: &ClassDescriptor);
}

impl<F> ImplementationHook for F
where
    F: Fn(&ClassDescriptor) + Send + Sync,
{
    fn register_implementation(&self, class: &ClassDescriptor) {
        self(class)
    }
}

/// Shared handle to a hook.
#[derive(Clone)]
pub struct HookHandle(Arc<dyn ImplementationHook>);

impl HookHandle {
    pub fn new(hook: impl ImplementationHook + 'static) -> Self {
        Self(Arc::new(hook))
    }

    pub fn call(&self, class: &ClassDescriptor) {
        self.0.register_implementation(class);
    }
}

impl fmt::Debug for HookHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HookHandle(..)")
    }
}
