// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Unit tests for configuration module

#[cfg(test)]
mod test {
    use super::super::*;
    use crate::error::AppError;
    use std::time::Duration;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.devices.is_empty());
        assert!(config.global.timeout.is_none());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_yaml() {
        let yaml = r"
global:
  timeout: 5s
devices:
  - url: https://192.168.5.1
    password: secret
  - url: http://10.0.0.1
    password: other
    timeout: 500ms
    insecure_skip_verify: false
";
        let config = Config::from_yaml_str(yaml).unwrap();
        assert_eq!(config.global.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.devices.len(), 2);
        assert_eq!(config.devices[0].url, "https://192.168.5.1");
        assert_eq!(config.devices[0].password, "secret");
        assert_eq!(config.devices[1].timeout, Some(Duration::from_millis(500)));
        assert_eq!(config.devices[1].insecure_skip_verify, Some(false));
    }

    #[test]
    fn test_config_from_json_document() {
        let json = r#"{"devices": [{"url": "http://192.168.5.1", "password": "pw", "timeout": 3}]}"#;
        let config = Config::from_yaml_str(json).unwrap();
        assert_eq!(config.devices[0].timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_timeout_precedence() {
        let yaml = r"
global:
  timeout: 7s
devices:
  - url: http://a.local
    password: pw
  - url: http://b.local
    password: pw
    timeout: 1s
";
        let config = Config::from_yaml_str(yaml).unwrap();
        let global = &config.global;
        assert_eq!(
            config.devices[0].effective_timeout(global),
            Duration::from_secs(7)
        );
        assert_eq!(
            config.devices[1].effective_timeout(global),
            Duration::from_secs(1)
        );

        let no_global = GlobalConfig::default();
        assert_eq!(
            config.devices[0].effective_timeout(&no_global),
            defaults::CLIENT_TIMEOUT
        );
    }

    #[test]
    fn test_insecure_skip_verify_precedence() {
        let yaml = r"
global:
  insecure_skip_verify: false
devices:
  - url: https://a.local
    password: pw
  - url: https://b.local
    password: pw
    insecure_skip_verify: true
";
        let config = Config::from_yaml_str(yaml).unwrap();
        assert!(!config.devices[0].effective_insecure_skip_verify(&config.global));
        assert!(config.devices[1].effective_insecure_skip_verify(&config.global));
        assert!(config.devices[0].effective_insecure_skip_verify(&GlobalConfig::default()));

        let options = config.devices[0].client_options(&config.global);
        assert!(!options.get_accept_invalid_certs());
        assert_eq!(options.get_timeout(), defaults::CLIENT_TIMEOUT);
    }

    #[test]
    fn test_rejects_empty_device_list() {
        let err = Config::from_yaml_str("devices: []").unwrap_err();
        assert!(err.to_string().contains("No devices configured"));
    }

    #[test]
    fn test_rejects_duplicate_devices() {
        let yaml = r"
devices:
  - url: http://a.local
    password: pw
  - url: http://a.local
    password: pw2
";
        let err = Config::from_yaml_str(yaml).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_rejects_invalid_url() {
        let yaml = r"
devices:
  - url: 192.168.5.1
    password: pw
";
        assert!(Config::from_yaml_str(yaml).is_err());

        let yaml = r"
devices:
  - url: ftp://192.168.5.1
    password: pw
";
        assert!(Config::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_rejects_bad_timeouts() {
        let yaml = r"
devices:
  - url: http://a.local
    password: pw
    timeout: soon
";
        assert!(matches!(
            Config::from_yaml_str(yaml),
            Err(AppError::Config(_))
        ));

        let yaml = r"
global:
  timeout: 0s
devices:
  - url: http://a.local
    password: pw
";
        assert!(Config::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_rejects_missing_password() {
        let yaml = r"
devices:
  - url: http://a.local
";
        assert!(Config::from_yaml_str(yaml).is_err());

        let yaml = r#"
devices:
  - url: http://a.local
    password: ""
"#;
        assert!(Config::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file("/nonexistent/lb112x.yaml").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = Config::from_yaml_str(
            "devices:\n  - url: http://a.local\n    password: hunter2\n",
        )
        .unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("http://a.local"));
    }
}
