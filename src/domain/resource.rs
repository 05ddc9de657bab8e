use super::error::ClassifiedError;

/// Tri-state outcome of a data load, as observed by the UI
#[derive(Debug, Clone)]
pub enum Resource<T> {
    Loading,
    Success(T),
    Failure {
        error: ClassifiedError,
        message: String,
    },
}

impl<T> Resource<T> {
    pub fn success(value: T) -> Self {
        Resource::Success(value)
    }

    pub fn fail(error: ClassifiedError, message: impl Into<String>) -> Self {
        Resource::Failure {
            error,
            message: message.into(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Resource::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Resource::Failure { .. })
    }

    pub fn as_success(&self) -> Option<&T> {
        match self {
            Resource::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_success(self) -> Option<T> {
        match self {
            Resource::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Borrow the classified error and its message
    pub fn as_failure(&self) -> Option<(&ClassifiedError, &str)> {
        match self {
            Resource::Failure { error, message } => Some((error, message)),
            _ => None,
        }
    }

    /// Transform the success payload, leaving the other states untouched
    pub fn map<U, F>(self, f: F) -> Resource<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Resource::Loading => Resource::Loading,
            Resource::Success(value) => Resource::Success(f(value)),
            Resource::Failure { error, message } => Resource::Failure { error, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ApiError;

    #[test]
    fn accessors_match_active_variant() {
        let loading: Resource<u32> = Resource::Loading;
        assert!(loading.is_loading());
        assert!(loading.as_success().is_none());
        assert!(loading.as_failure().is_none());

        let ok = Resource::success(7u32);
        assert!(ok.is_success());
        assert_eq!(ok.as_success(), Some(&7));
        assert_eq!(ok.into_success(), Some(7));

        let failed: Resource<u32> = Resource::fail(ClassifiedError::NoConnection, "offline");
        assert!(failed.is_failure());
        let (error, message) = failed.as_failure().unwrap();
        assert!(matches!(error, ClassifiedError::NoConnection));
        assert_eq!(message, "offline");
    }

    #[test]
    fn map_only_touches_success() {
        assert_eq!(Resource::success(2).map(|v| v * 10).into_success(), Some(20));
        assert!(Resource::<u8>::Loading.map(|v| v + 1).is_loading());

        let failed = Resource::<u8>::fail(
            ClassifiedError::Api(ApiError::new("E1", "denied", false)),
            "denied",
        )
        .map(|v| v.to_string());
        assert_eq!(failed.as_failure().map(|(_, m)| m), Some("denied"));
    }
}
