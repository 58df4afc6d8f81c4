//! The seam through which use-when conditions are resolved.

/// Any error an evaluator wants to report. It is surfaced to the caller
/// unchanged inside `AxisNodesError::UseWhen`.
pub type UseWhenError = Box<dyn std::error::Error + Send + Sync>;

/// Resolves a use-when expression found on a pipeline element.
///
/// Implementations own whatever evaluation state they need (static
/// options, namespace bindings, system properties). The filter never looks
/// inside; it only asks whether the element takes part.
pub trait UseWhenEvaluator<N> {
    fn use_when(&self, element: &N, expression: &str) -> Result<bool, UseWhenError>;
}

impl<N, F> UseWhenEvaluator<N> for F
where
    F: Fn(&N, &str) -> Result<bool, UseWhenError>,
{
    fn use_when(&self, element: &N, expression: &str) -> Result<bool, UseWhenError> {
        self(element, expression)
    }
}
