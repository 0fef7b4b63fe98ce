use depcalc_util::errors::DepcalcError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = DepcalcError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_invalid_argument_display() {
    let err = DepcalcError::InvalidArgument {
        message: "No modules specified".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid argument: No modules specified");
}

#[test]
fn test_configuration_missing_display() {
    let err = DepcalcError::ConfigurationMissing {
        message: "no root".to_string(),
    };
    assert_eq!(err.to_string(), "Configuration missing: no root");
}

#[test]
fn test_parse_error_display() {
    let err = DepcalcError::Parse {
        path: "yui3.json".to_string(),
        message: "expected value".to_string(),
    };
    assert_eq!(err.to_string(), "Failed to parse yui3.json: expected value");
}

#[test]
fn test_unknown_module_display() {
    let err = DepcalcError::UnknownModule {
        id: "foo".to_string(),
    };
    assert_eq!(err.to_string(), "Unknown module: foo");
}

#[test]
fn test_generic_error_display() {
    let err = DepcalcError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: DepcalcError = io_err.into();
    assert!(matches!(err, DepcalcError::Io(_)));
}

#[test]
fn test_error_lifts_into_report() {
    let report: miette::Report = DepcalcError::InvalidArgument {
        message: "empty".to_string(),
    }
    .into();
    assert!(matches!(
        report.downcast_ref::<DepcalcError>(),
        Some(DepcalcError::InvalidArgument { .. })
    ));
}
