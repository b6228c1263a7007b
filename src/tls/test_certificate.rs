//! Certificate fixture shared by the TLS unit tests.

/// Self-signed P-256 certificate, serial 0x8F1B2C,
/// valid Oct 18 22:00:54 2026 GMT to Nov 17 22:00:54 2026 GMT.
pub const TEST_CERT_PEM: &str = "-----BEGIN CERTIFICATE-----
MIIBtzCCAV2gAwIBAgIEAI8bLDAKBggqhkjOPQQDAjA5MQswCQYDVQQGEwJVUzEU
MBIGA1UECgwLRXhhbXBsZSBPcmcxFDASBgNVBAMMC2V4YW1wbGUuY29tMB4XDTI2
MTAxODIyMDA1NFoXDTI2MTExNzIyMDA1NFowOTELMAkGA1UEBhMCVVMxFDASBgNV
BAoMC0V4YW1wbGUgT3JnMRQwEgYDVQQDDAtleGFtcGxlLmNvbTBZMBMGByqGSM49
AgEGCCqGSM49AwEHA0IABA2nDo7c+DOcL4vZ5wcGvIr7onXqQCtgRRErL1KCUdiS
+vuW6EtcyhWLN52rE/phxPJ/1Hc8ml/BVX3bmX834AajUzBRMB0GA1UdDgQWBBSJ
fzUpK3LU0jI2VEA6c/U5xpVQiTAfBgNVHSMEGDAWgBSJfzUpK3LU0jI2VEA6c/U5
xpVQiTAPBgNVHRMBAf8EBTADAQH/MAoGCCqGSM49BAMCA0gAMEUCIQDQlMycMOvj
hX8iUyVEPNoLqowLFnnrG2XqwlzB6qwbhwIgDedoVoROqNkHRN9dd1CDQUlGAXiV
J7PnMYfbyUnOLeo=
-----END CERTIFICATE-----
";

pub fn test_cert_der() -> Vec<u8> {
    let (_, pem) = x509_parser::pem::parse_x509_pem(TEST_CERT_PEM.as_bytes()).unwrap();
    pem.contents
}
