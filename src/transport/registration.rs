use serde_json::json;

use crate::domain::{
    CountryCode, NationalNumber, Pin, RegistrationOutcome, RegistrationRequest, VerificationCode,
    VnameCert,
};

/// Registration always requests the code over SMS.
const REGISTRATION_METHOD: &str = "sms";

pub fn encode_registration_code_body(request: &RegistrationRequest) -> String {
    let mut body = json!({
        (CountryCode::FIELD): request.country_code().as_str(),
        (NationalNumber::FIELD): request.phone_number().as_str(),
        "method": REGISTRATION_METHOD,
        (VnameCert::FIELD): request.cert().as_str(),
    });
    if let Some(pin) = request.pin() {
        body[Pin::FIELD] = json!(pin.as_str());
    }
    body.to_string()
}

pub fn encode_verification_body(code: &VerificationCode) -> String {
    json!({ (VerificationCode::FIELD): code.as_str() }).to_string()
}

/// Map the HTTP status of a registration-code request to its outcome.
///
/// Statuses outside the transport success set never reach this function.
pub fn registration_code_outcome(status: u16) -> RegistrationOutcome {
    match status {
        201 => RegistrationOutcome::Created,
        202 => RegistrationOutcome::Accepted,
        _ => RegistrationOutcome::Error,
    }
}

/// Map the HTTP status of a registration verification to its outcome.
pub fn verification_outcome(status: u16) -> RegistrationOutcome {
    match status {
        201 => RegistrationOutcome::Created,
        _ => RegistrationOutcome::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn request_without_pin() -> RegistrationRequest {
        RegistrationRequest::new(
            CountryCode::new("7").unwrap(),
            NationalNumber::new("9251234567").unwrap(),
            VnameCert::new("Q2VydA==").unwrap(),
        )
    }

    #[test]
    fn encode_registration_body_without_pin() {
        let body: Value =
            serde_json::from_str(&encode_registration_code_body(&request_without_pin())).unwrap();
        assert_eq!(
            body,
            json!({
                "country_code": "7",
                "phone_number": "9251234567",
                "method": "sms",
                "cert": "Q2VydA=="
            })
        );
    }

    #[test]
    fn encode_registration_body_with_pin() {
        let request = request_without_pin().with_pin(Pin::new("123456").unwrap());
        let body: Value = serde_json::from_str(&encode_registration_code_body(&request)).unwrap();
        assert_eq!(body["pin"], json!("123456"));
        assert_eq!(body["method"], json!("sms"));
    }

    #[test]
    fn encode_verification_body_carries_code() {
        let code = VerificationCode::new("123-456").unwrap();
        let body: Value = serde_json::from_str(&encode_verification_body(&code)).unwrap();
        assert_eq!(body, json!({ "code": "123-456" }));
    }

    #[test]
    fn registration_outcome_maps_created_accepted_error() {
        assert_eq!(registration_code_outcome(201), RegistrationOutcome::Created);
        assert_eq!(
            registration_code_outcome(202),
            RegistrationOutcome::Accepted
        );
        assert_eq!(registration_code_outcome(200), RegistrationOutcome::Error);
    }

    #[test]
    fn verification_outcome_maps_created_and_error() {
        assert_eq!(verification_outcome(201), RegistrationOutcome::Created);
        assert_eq!(verification_outcome(202), RegistrationOutcome::Error);
        assert_eq!(verification_outcome(200), RegistrationOutcome::Error);
    }
}
