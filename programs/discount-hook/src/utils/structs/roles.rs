/// The roles allowed to call the restricted instructions of the hook.
///
/// | Role          | Instructions                                                     |
/// |---------------|------------------------------------------------------------------|
/// | `Admin`       | config, venue setup, encrypted params, manual start and end      |
/// | `Engine`      | `before_swap`, `after_swap`                                      |
/// | `Coprocessor` | `submit_evaluation`                                              |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Engine,
    Coprocessor,
}
