use fieldcheck::{
    ipv4, one_of, range, required, required_str, Bound, Validate, ValidationErrors, Validator,
    Violation,
};

const BAUD_RATES: [u32; 3] = [2400, 9600, 115200];

#[derive(Debug, Default)]
pub struct Port {
    number: Option<u32>,
}

impl Validate for Port {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        if let Some(number) = self.number {
            v.check(range(
                "number",
                number,
                Some(Bound::Inclusive(1)),
                Some(Bound::Inclusive(65535)),
            ));
        }
        v.finish()
    }
}

#[derive(Debug, Default)]
pub struct Gateway {
    name: Option<String>,
    host: Option<String>,
    baudrate: Option<u32>,
    enabled: Option<bool>,
    control_port: Option<Port>,
    ports: Vec<Option<Port>>,
}

impl Validate for Gateway {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        if let Some(baudrate) = self.baudrate {
            v.check(one_of("baudrate", baudrate, &BAUD_RATES));
        }
        v.check(required("enabled", self.enabled.as_ref()));
        if let Some(host) = self.host.as_deref().filter(|h| !h.is_empty()) {
            v.check(ipv4("host", host));
        }
        v.check(required_str("name", self.name.as_deref()));
        v.nested("control_port", self.control_port.as_ref());
        v.each("ports", &self.ports);
        v.finish()
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn valid_record_passes() {
    init_logging();
    let gateway = Gateway {
        name: Some("edge-1".to_string()),
        host: Some("192.168.1.20".to_string()),
        baudrate: Some(9600),
        enabled: Some(false),
        control_port: Some(Port { number: Some(502) }),
        ports: vec![Some(Port { number: Some(1) }), None],
    };
    assert!(gateway.validate().is_ok());
}

#[test]
fn all_violations_are_collected_in_field_order() {
    init_logging();
    let gateway = Gateway {
        name: None,
        host: Some("300.1.1.1".to_string()),
        baudrate: Some(4800),
        enabled: None,
        control_port: Some(Port { number: Some(0) }),
        ports: vec![
            Some(Port { number: Some(80) }),
            Some(Port {
                number: Some(70000),
            }),
        ],
    };

    let errors = gateway.validate().unwrap_err();
    let paths: Vec<&str> = errors.iter().map(Violation::path).collect();
    assert_eq!(
        paths,
        vec!["baudrate", "enabled", "host", "name", "control_port", "ports.1"]
    );

    let leaf_paths: Vec<String> = errors
        .leaves()
        .iter()
        .map(|v| v.path().to_string())
        .collect();
    assert_eq!(leaf_paths[4], "control_port.number");
    assert_eq!(leaf_paths[5], "ports.1.number");

    assert!(matches!(errors.at("baudrate"), Some(Violation::NotInEnum { .. })));
    assert!(matches!(errors.at("host"), Some(Violation::BadFormat { .. })));
    assert!(matches!(
        errors.at("enabled"),
        Some(Violation::MissingRequiredField { .. })
    ));
}

#[test]
fn empty_optional_string_is_not_checked() {
    init_logging();
    let gateway = Gateway {
        name: Some("edge-2".to_string()),
        host: Some(String::new()),
        enabled: Some(true),
        ..Default::default()
    };
    assert!(gateway.validate().is_ok());
}
