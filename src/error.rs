#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// Typed failures from the fitting core.
///
/// `DegenerateFit` is recoverable: the scatter of raw samples remains valid
/// and useful on its own, only the trendline layer is withheld. `InvalidInput`
/// is not recoverable and aborts the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FitError {
    /// The sample set (or a model's positivity requirement) rules out a fit.
    InvalidInput(String),
    /// The normal-equation system is singular; no unique solution exists.
    DegenerateFit(&'static str),
}

impl std::fmt::Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitError::InvalidInput(reason) => write!(f, "Invalid input: {reason}"),
            FitError::DegenerateFit(reason) => write!(f, "Degenerate fit: {reason}"),
        }
    }
}

impl std::error::Error for FitError {}

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        let exit_code = match &err {
            FitError::InvalidInput(_) => 2,
            FitError::DegenerateFit(_) => 3,
        };
        AppError::new(exit_code, err.to_string())
    }
}
