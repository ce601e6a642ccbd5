use crate::model::strip_marker;

/// Build the URI that asks the host application to search for a tag, e.g.
/// `obsidian://search?query=tag:project%2Falpha`.
pub fn search_uri(scheme: &str, tag: &str, vault: Option<&str>) -> String {
    let mut uri = format!(
        "{}://search?query=tag:{}",
        scheme,
        urlencoding::encode(strip_marker(tag))
    );
    if let Some(vault) = vault {
        uri.push_str("&vault=");
        uri.push_str(&urlencoding::encode(vault));
    }
    uri
}
