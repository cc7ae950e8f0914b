use super::*;
use crate::source::AllowListSource;

mod default {
    use super::*;

    #[test]
    fn when_constructed_should_use_expected_defaults() {
        // Arrange & Act
        let options = FilterOptions::default();

        // Assert
        assert!(matches!(options.origins, AllowListSource::Static(ref list) if list.is_empty()));
        assert_eq!(
            options.allowed_methods,
            ["GET", "POST", "PUT", "DELETE", "OPTIONS"]
        );
        assert_eq!(
            options.allowed_headers,
            [
                "Content-Type",
                "Authorization",
                "X-App-ID",
                "Accept",
                "Origin",
                "X-Requested-With",
            ]
        );
        assert!(options.credentials);
        assert_eq!(options.preflight_status, 204);
        assert_eq!(options.liveness.path, "/api/health");
        assert_eq!(options.liveness.suffix, "/health");
        assert_eq!(options.liveness.service_state, "running");
        assert_eq!(options.liveness.version, "1.0.0");
    }

    #[test]
    fn when_validated_should_pass() {
        // Arrange & Act
        let result = FilterOptions::default().validate();

        // Assert
        assert_eq!(result, Ok(()));
    }
}

mod from_env {
    use super::*;

    #[test]
    fn when_called_should_read_allowed_origins_variable() {
        // Arrange & Act
        let options = FilterOptions::from_env();

        // Assert
        match options.origins {
            AllowListSource::Env(source) => assert_eq!(source.variable(), "ALLOWED_ORIGINS"),
            other => panic!("expected env source, got {other:?}"),
        }
    }
}

mod validate {
    use super::*;

    #[test]
    fn when_methods_empty_should_return_error() {
        // Arrange
        let options = FilterOptions {
            allowed_methods: Vec::new(),
            ..FilterOptions::default()
        };

        // Act & Assert
        assert_eq!(options.validate(), Err(ValidationError::EmptyAllowedMethods));
    }

    #[test]
    fn when_method_not_token_should_return_error() {
        // Arrange
        let options = FilterOptions {
            allowed_methods: vec!["GET, POST".into()],
            ..FilterOptions::default()
        };

        // Act & Assert
        assert_eq!(
            options.validate(),
            Err(ValidationError::InvalidMethod("GET, POST".into()))
        );
    }

    #[test]
    fn when_header_not_token_should_return_error() {
        // Arrange
        let options = FilterOptions {
            allowed_headers: vec!["X-App ID".into()],
            ..FilterOptions::default()
        };

        // Act & Assert
        assert_eq!(
            options.validate(),
            Err(ValidationError::InvalidHeaderName("X-App ID".into()))
        );
    }

    #[test]
    fn when_credentials_with_wildcard_header_should_return_error() {
        // Arrange
        let options = FilterOptions {
            allowed_headers: vec!["*".into()],
            credentials: true,
            ..FilterOptions::default()
        };

        // Act & Assert
        assert_eq!(
            options.validate(),
            Err(ValidationError::AllowedHeadersCannotContainWildcard)
        );
    }

    #[test]
    fn when_wildcard_header_without_credentials_should_pass() {
        // Arrange
        let options = FilterOptions {
            allowed_headers: vec!["*".into()],
            credentials: false,
            ..FilterOptions::default()
        };

        // Act & Assert
        assert_eq!(options.validate(), Ok(()));
    }

    #[test]
    fn when_preflight_status_not_success_should_return_error() {
        // Arrange
        let options = FilterOptions {
            preflight_status: 399,
            ..FilterOptions::default()
        };

        // Act & Assert
        assert_eq!(
            options.validate(),
            Err(ValidationError::InvalidPreflightStatus(399))
        );
    }

    #[test]
    fn when_liveness_path_relative_should_return_error() {
        // Arrange
        let options = FilterOptions {
            liveness: LivenessOptions {
                path: "api/health".into(),
                ..LivenessOptions::default()
            },
            ..FilterOptions::default()
        };

        // Act & Assert
        assert_eq!(
            options.validate(),
            Err(ValidationError::InvalidLivenessPath("api/health".into()))
        );
    }

    #[test]
    fn when_liveness_suffix_empty_should_return_error() {
        // Arrange
        let options = FilterOptions {
            liveness: LivenessOptions {
                suffix: String::new(),
                ..LivenessOptions::default()
            },
            ..FilterOptions::default()
        };

        // Act & Assert
        assert_eq!(options.validate(), Err(ValidationError::EmptyLivenessSuffix));
    }
}

mod liveness_matches {
    use super::*;

    #[test]
    fn when_path_is_exact_liveness_path_should_match() {
        assert!(LivenessOptions::default().matches("/api/health"));
    }

    #[test]
    fn when_path_ends_with_suffix_should_match() {
        let liveness = LivenessOptions::default();

        assert!(liveness.matches("/health"));
        assert!(liveness.matches("/v2/service/health"));
    }

    #[test]
    fn when_path_only_contains_suffix_should_not_match() {
        let liveness = LivenessOptions::default();

        assert!(!liveness.matches("/api/health/details"));
        assert!(!liveness.matches("/api/orders"));
    }
}
