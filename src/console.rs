//! Console checklist generation: redirect URIs, JS origins, authorized domains.
//!
//! Pure functions. Operators diff this output against what the external
//! consoles show, so identical input must always produce byte-identical
//! lists.

/// OAuth callback path served by Firebase Hosting.
const HANDLER_PATH: &str = "/__/auth/handler";

/// Redirect URIs that must be registered in the Google Cloud console.
///
/// The production handler comes first and the bare-localhost handler last;
/// each port contributes a localhost entry and a 127.0.0.1 entry, in input
/// order.
pub fn redirect_uris(auth_domain: &str, ports: &[u16]) -> Vec<String> {
    let mut uris = Vec::with_capacity(2 * ports.len() + 2);
    uris.push(format!("https://{}{}", auth_domain, HANDLER_PATH));
    for port in ports {
        uris.push(format!("http://localhost:{}{}", port, HANDLER_PATH));
        uris.push(format!("http://127.0.0.1:{}{}", port, HANDLER_PATH));
    }
    uris.push(format!("http://localhost{}", HANDLER_PATH));
    uris
}

/// JavaScript origins matching [`redirect_uris`], without the handler path.
pub fn javascript_origins(auth_domain: &str, ports: &[u16]) -> Vec<String> {
    let mut origins = Vec::with_capacity(2 * ports.len() + 2);
    origins.push(format!("https://{}", auth_domain));
    for port in ports {
        origins.push(format!("http://localhost:{}", port));
        origins.push(format!("http://127.0.0.1:{}", port));
    }
    origins.push("http://localhost".to_string());
    origins
}

/// Domains that must be authorized in the Firebase console.
pub fn authorized_domains(auth_domain: &str) -> Vec<String> {
    vec!["localhost".to_string(), auth_domain.to_string()]
}
