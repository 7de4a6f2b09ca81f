/// Sign-in SDK boundary.
///
/// URL-scheme redirects from the sign-in flow are passed through verbatim;
/// the SDK decides whether the URL belongs to it.
pub trait SignInRedirect: Send + Sync {
    /// Returns true when the sign-in SDK consumed the URL.
    fn handle_redirect_url(&self, url: &str) -> bool;
}
