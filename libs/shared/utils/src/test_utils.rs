use serde_json::{json, Value};

use shared_config::PropertyBag;
use shared_models::OperationContext;

/// Self-signed certificate for `nagiosrest.test`, used wherever a parseable PEM is needed.
pub const TEST_CERTIFICATE_PEM: &str = "\
-----BEGIN CERTIFICATE-----\n\
MIIDFzCCAf+gAwIBAgIUOHrjseurP8O1XCWbWWHmAmMlw18wDQYJKoZIhvcNAQEL\n\
BQAwGjEYMBYGA1UEAwwPbmFnaW9zcmVzdC50ZXN0MCAXDTI2MTAxOTA5NTEzMFoY\n\
DzIxMjYwOTI1MDk1MTMwWjAaMRgwFgYDVQQDDA9uYWdpb3NyZXN0LnRlc3QwggEi\n\
MA0GCSqGSIb3DQEBAQUAA4IBDwAwggEKAoIBAQC43tHmq3MQfAPUi+nFaTU2LJNG\n\
SF/I2OqzXvMXioQOYpkMunWcNMBzNHmOEFyIPn4OdACnieQdiz6x72Y5fTwy84KO\n\
lnlhUyIAQ7r904O6/ZLN6mHI3Cva/Z+hWWYg2G7DlSJ/CSSdlGXBGgugEfVHIG2b\n\
JpymYjTfvcs7Yo+oFCSucd22nHpjOnlddbQLd7Z92EkL9ECPsVG2tnfAwykDK2cg\n\
lge4dYcQ4YddnGtn5EG7OSzdc1Ur1pKlNU7VdaCRkq5xj5j2jpwMlVnktBF2xeYZ\n\
WkxlwQZOL745uT3h+P3Pjh51tg8aqhDVIL73/n/dIrnLHP6n0I8vW86wLZg9AgMB\n\
AAGjUzBRMB0GA1UdDgQWBBSGoZPSfMgQIzOydY9+KQt0Xc+PQjAfBgNVHSMEGDAW\n\
gBSGoZPSfMgQIzOydY9+KQt0Xc+PQjAPBgNVHRMBAf8EBTADAQH/MA0GCSqGSIb3\n\
DQEBCwUAA4IBAQBNU/MCwLpoPNr+CPAEPzq/HobThkGZurg/losQSHQKXri+zv43\n\
ifszwqzOcNaUFbdMFRixv8up+a7BxWmE9/7wQAP6KlEZPbT09sW3S3Zhb+u8AUmW\n\
s29fRS6F2tQ4Zamz9WR5twqSq5wUxIYExTuGuwqgv9CtvnFovourtDDdtJDsJDP6\n\
qFzU6cRTjqu/1aiGT7tmjEXI6nNo8A//AxP2Tg6NKGZYIsul9p6mvSC0C0FXUMOM\n\
kgR0aghZkXqnHdYHRHLnI8HbeqJtagAM51NIf85wkqBfgAHkAodndofT4g+B0IBn\n\
jyz8QPmkv0Nnjd6+X7QN+fyb/R1bEffw4gx5\n\
-----END CERTIFICATE-----\n\
";

pub struct TestMonitoring {
    pub address: String,
    pub username: String,
    pub password: String,
    pub certificate: String,
    pub instance_ip_property: String,
    pub deployment_override: Option<String>,
    pub target_type: String,
    pub groups: Vec<String>,
}

impl Default for TestMonitoring {
    fn default() -> Self {
        Self {
            address: "192.0.2.10".to_string(),
            username: "nagios".to_string(),
            password: "s3cret".to_string(),
            certificate: TEST_CERTIFICATE_PEM.to_string(),
            instance_ip_property: "ip".to_string(),
            deployment_override: None,
            target_type: "linux-server".to_string(),
            groups: vec!["web".to_string(), "frontend".to_string()],
        }
    }
}

impl TestMonitoring {
    pub fn to_value(&self) -> Value {
        json!({
            "address": self.address,
            "username": self.username,
            "password": self.password,
            "certificate": self.certificate,
            "instance_ip_property": self.instance_ip_property,
            "deployment_override": self.deployment_override,
            "target_type": self.target_type,
            "groups": self.groups,
        })
    }
}

/// Builds an `OperationContext` the way the host would hand it to an operation.
pub struct TestContext {
    context: OperationContext,
}

impl Default for TestContext {
    fn default() -> Self {
        let mut node_properties = PropertyBag::new();
        node_properties.insert(
            "nagiosrest_monitoring".to_string(),
            TestMonitoring::default().to_value(),
        );

        let mut runtime_properties = PropertyBag::new();
        runtime_properties.insert("ip".to_string(), json!("10.0.0.7"));

        Self {
            context: OperationContext {
                tenant_name: "default_tenant".to_string(),
                deployment_id: "web_app".to_string(),
                instance_id: "vm_abc123".to_string(),
                node_properties,
                runtime_properties,
                inputs: PropertyBag::new(),
            },
        }
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context with no properties at all.
    pub fn bare() -> Self {
        Self {
            context: OperationContext {
                tenant_name: "default_tenant".to_string(),
                deployment_id: "web_app".to_string(),
                instance_id: "vm_abc123".to_string(),
                ..OperationContext::default()
            },
        }
    }

    pub fn monitoring(self, monitoring: TestMonitoring) -> Self {
        self.node("nagiosrest_monitoring", monitoring.to_value())
    }

    pub fn node(mut self, key: &str, value: Value) -> Self {
        self.context.node_properties.insert(key.to_string(), value);
        self
    }

    pub fn runtime(mut self, key: &str, value: Value) -> Self {
        self.context.runtime_properties.insert(key.to_string(), value);
        self
    }

    pub fn input(mut self, key: &str, value: Value) -> Self {
        self.context.inputs.insert(key.to_string(), value);
        self
    }

    pub fn without_node(mut self, key: &str) -> Self {
        self.context.node_properties.remove(key);
        self
    }

    pub fn without_runtime(mut self, key: &str) -> Self {
        self.context.runtime_properties.remove(key);
        self
    }

    pub fn build(self) -> OperationContext {
        self.context
    }
}
