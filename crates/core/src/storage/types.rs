use super::ScanLimitError;

/// Maximum number of items returned by a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanLimit(usize);

impl ScanLimit {
    /// The cap used when none is configured.
    pub const DEFAULT: ScanLimit = ScanLimit(50);

    /// Creates a scan limit, rejecting zero.
    pub fn new(limit: usize) -> Result<Self, ScanLimitError> {
        if limit == 0 {
            return Err(ScanLimitError::Zero);
        }
        Ok(Self(limit))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for ScanLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fifty() {
        assert_eq!(ScanLimit::default().get(), 50);
    }

    #[test]
    fn test_zero_is_rejected() {
        assert_eq!(ScanLimit::new(0), Err(ScanLimitError::Zero));
    }

    #[test]
    fn test_valid_limit() {
        assert_eq!(ScanLimit::new(1).unwrap().get(), 1);
        assert_eq!(ScanLimit::new(500).unwrap().get(), 500);
    }
}
