//! Signing for requests built with `reqwest`.

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Request;
use url::form_urlencoded;

use super::credential::Credential;
use super::parameters::Body;
use super::signer::Signer;
use super::values::FORM_URLENCODED;
use crate::error::Result;

/// Attach an OAuth `Authorization` header to an outgoing request.
pub trait SignRequest {
    fn sign_oauth(&mut self, signer: &Signer, credential: &Credential) -> Result<()>;
}

impl SignRequest for Request {
    /// Form-encoded bodies held in memory are signed along with the query;
    /// any other body is left out of the signature.
    fn sign_oauth(&mut self, signer: &Signer, credential: &Credential) -> Result<()> {
        let body = form_body(self);
        let header = signer.sign_url(self.url(), self.method().as_str(), credential, &body)?;
        self.headers_mut()
            .insert(AUTHORIZATION, HeaderValue::from_str(&header)?);
        Ok(())
    }
}

fn form_body(request: &Request) -> Body {
    let is_form = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|media_type| media_type.trim().eq_ignore_ascii_case(FORM_URLENCODED))
        .unwrap_or(false);
    if !is_form {
        return Body::Empty;
    }
    request
        .body()
        .and_then(|b| b.as_bytes())
        .map(|bytes| Body::Params(form_urlencoded::parse(bytes).into_owned().collect()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v1::Providers;
    use pretty_assertions::assert_eq;
    use reqwest::Method;

    fn signer() -> Signer {
        let providers =
            Providers::fixed("kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg", "1318622958");
        Signer::new(providers)
    }

    fn credential() -> Credential {
        Credential::new(
            "xvz1evFS4wEEPTGEFPHBog",
            "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
            "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
            "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
        )
    }

    fn twitter_request(content_type: &str) -> Request {
        let url = "https://api.twitter.com/1.1/statuses/update.json?include_entities=true"
            .parse()
            .unwrap();
        let mut request = Request::new(Method::POST, url);
        request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());
        *request.body_mut() = Some(
            "status=Hello%20Ladies%20%2B%20Gentlemen%2C%20a%20signed%20OAuth%20request%21".into(),
        );
        request
    }

    #[test]
    fn test_sign_form_request() {
        let mut request = twitter_request(FORM_URLENCODED);
        request.sign_oauth(&signer(), &credential()).unwrap();

        let header = request.headers()[AUTHORIZATION].to_str().unwrap();
        assert!(header.contains("oauth_signature=\"hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D\""));
    }

    #[test]
    fn test_form_content_type_is_case_insensitive() {
        let mut request = twitter_request("Application/X-WWW-Form-URLEncoded; charset=UTF-8");
        request.sign_oauth(&signer(), &credential()).unwrap();

        let header = request.headers()[AUTHORIZATION].to_str().unwrap();
        assert!(header.contains("oauth_signature=\"hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D\""));
    }

    #[test]
    fn test_form_body_is_parsed_from_raw_bytes() {
        let url = "https://example.com/upload".parse().unwrap();
        let mut request = Request::new(Method::POST, url);
        request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(FORM_URLENCODED));
        *request.body_mut() = Some(b"name=caf%C3%A9&flag".to_vec().into());

        let body = form_body(&request);
        let expected: Body = vec![("name", "café"), ("flag", "")].into();
        assert_eq!(body, expected);
    }

    #[test]
    fn test_non_form_body_is_not_signed() {
        let mut json = twitter_request("application/json");
        json.sign_oauth(&signer(), &credential()).unwrap();

        let url = "https://api.twitter.com/1.1/statuses/update.json?include_entities=true";
        let expected = signer()
            .sign(url, "POST", &credential(), Body::Empty)
            .unwrap();
        assert_eq!(json.headers()[AUTHORIZATION].to_str().unwrap(), expected);
    }
}
