/// Websocket URL for a backend path, derived from the page's own origin.
pub fn prepare_relative_url(relative_url: &str) -> String {
    let location = gloo_utils::window().location();

    ws_url(
        &location.protocol().unwrap(),
        &location.host().unwrap(),
        relative_url,
    )
}

fn ws_url(page_protocol: &str, host: &str, relative_url: &str) -> String {
    let scheme = if page_protocol == "https:" { "wss:" } else { "ws:" };
    format!("{scheme}//{host}{relative_url}")
}

#[cfg(test)]
mod tests {
    use super::ws_url;

    #[test]
    fn scheme_follows_the_page_protocol() {
        assert_eq!(
            ws_url("http:", "127.0.0.1:8000", "/api/ws/theme"),
            "ws://127.0.0.1:8000/api/ws/theme"
        );
        assert_eq!(
            ws_url("https:", "events.example.com", "/api/ws/theme"),
            "wss://events.example.com/api/ws/theme"
        );
    }
}
