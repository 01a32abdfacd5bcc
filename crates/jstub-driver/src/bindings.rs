/// Contract for the external collaborator that augments the synthetic
/// `java` package with hand-written declarations (`java.jint`,
/// `java.chaquopy.JavaArray`, and similar bridge-runtime types).
///
/// Synthesizing those declarations is outside the core's scope; this trait
/// only describes the seam the driver calls through when it builds the
/// `java` package. `imports` and `code` are the same mutable collections the
/// rest of that package's `__init__.pyi` is assembled from.
pub trait BindingsInjector: Sync {
    fn inject(&self, imports: &mut Vec<String>, code: &mut Vec<String>);
}

/// The default collaborator: adds nothing. Used whenever no bindings
/// injector is supplied.
pub struct NoopBindingsInjector;

impl BindingsInjector for NoopBindingsInjector {
    fn inject(&self, _imports: &mut Vec<String>, _code: &mut Vec<String>) {}
}
