// Host-side tests for the embedded site configuration.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod inquiry {
        include!("../src/core/inquiry.rs");
    }
}
mod config {
    include!("../src/config.rs");
}

use crate::config::*;
use crate::core::inquiry::RequiredField;

#[test]
fn empty_object_gives_defaults() {
    let cfg = SiteConfig::from_json("{}").unwrap();
    assert_eq!(cfg, SiteConfig::default());
    assert_eq!(cfg.level().unwrap(), log::Level::Info);
    assert_eq!(cfg.watchdog_ms, 3500);
    assert_eq!(cfg.form_relay.endpoint, "https://api.web3forms.com/submit");
    let policy = cfg.submit_policy();
    assert!(policy.channels.chat && policy.channels.email_relay);
    assert!(!policy.channels.form_relay);
    assert_eq!(
        policy.required,
        vec![RequiredField::EventType, RequiredField::Location]
    );
}

#[test]
fn partial_config_overrides_only_given_fields() {
    let cfg = SiteConfig::from_json(
        r#"{
            "log_level": "debug",
            "channels": { "form_relay": true },
            "chat": { "phone": "15550100" },
            "required_fields": ["event_type", "crowd_size"]
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.level().unwrap(), log::Level::Debug);
    assert!(cfg.channels.form_relay);
    assert!(cfg.channels.chat);
    assert_eq!(cfg.chat.phone, "15550100");
    assert_eq!(cfg.chat.header, "New Inquiry for AV PRODUCTION");
    assert_eq!(
        cfg.submit_policy().required,
        vec![RequiredField::EventType, RequiredField::CrowdSize]
    );
}

#[test]
fn bad_input_is_rejected() {
    assert!(matches!(
        SiteConfig::from_json("not json"),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        SiteConfig::from_json(r#"{"log_level": "loud"}"#),
        Err(ConfigError::LogLevel(_))
    ));
}
