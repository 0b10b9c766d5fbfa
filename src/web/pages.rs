//! HTML page rendering
//!
//! Every interpolated value goes through `escape_html`. The reference flow
//! this demo illustrates is notorious for string-built HTML; the escaping
//! step closes the injection hole without pulling in a template engine.

use crate::oauth::UserProfile;

/// Escape a value for interpolation into HTML text or attributes
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head><title>{title}</title></head>
  <body>
{body}
  </body>
</html>
"#,
        title = escape_html(title),
        body = body,
    )
}

/// Login page with the authorization redirect link
pub fn index(login_url: &str) -> String {
    page(
        "LINE Login Demo",
        &format!(
            r#"    <h1>LINE Login Demo</h1>
    <p><a href="{url}">Log in with LINE</a></p>"#,
            url = escape_html(login_url),
        ),
    )
}

/// Success confirmation shown at the end of the callback flow
pub fn login_success(profile: &UserProfile) -> String {
    page(
        "Login Successful",
        &format!(
            r#"    <h1>Login Successful</h1>
    <p>Welcome, {name}!</p>
    <p><a href="/me">View your profile</a></p>"#,
            name = escape_html(&profile.display_name),
        ),
    )
}

/// Profile page rendering the stored user attributes
pub fn profile(user: &UserProfile) -> String {
    let picture = match &user.picture_url {
        Some(url) => format!(
            r#"    <p><img src="{url}" alt="profile picture" width="128"></p>
"#,
            url = escape_html(url),
        ),
        None => String::new(),
    };

    page(
        "Your Profile",
        &format!(
            r#"    <h1>Your Profile</h1>
{picture}    <p>Display name: {name}</p>
    <p>User ID: {id}</p>
    <p><a href="/">Back to start</a></p>"#,
            picture = picture,
            name = escape_html(&user.display_name),
            id = escape_html(&user.user_id),
        ),
    )
}

/// Shown when `/me` is visited without a logged-in session
pub fn not_logged_in() -> String {
    page(
        "Not Logged In",
        r#"    <h1>Not Logged In</h1>
    <p>You are not logged in.</p>
    <p><a href="/">Log in with LINE</a></p>"#,
    )
}

/// Plain failure page with a human-readable message
pub fn failure(message: &str) -> String {
    page(
        "Login Failed",
        &format!(
            r#"    <h1>Login Failed</h1>
    <p>{message}</p>
    <p><a href="/">Try again</a></p>"#,
            message = escape_html(message),
        ),
    )
}
