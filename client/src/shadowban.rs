use sportstalk_protocol::ChatEvent;

/// Drop shadowbanned events the viewer did not write.
///
/// The server returns shadowbanned messages to everyone; hiding them is the
/// client's job. Authors keep seeing their own messages. Order is preserved.
/// A surviving event that quotes or replies to a hidden event loses that
/// embedded copy; nothing else about it changes.
pub fn filter_shadowbanned(events: Vec<ChatEvent>, viewer: Option<&str>) -> Vec<ChatEvent> {
    events
        .into_iter()
        .filter(|event| event.is_visible_to(viewer))
        .map(|mut event| {
            strip_hidden_quotes(&mut event, viewer);
            event
        })
        .collect()
}

/// Cut the `reply_to` chain of `event` at the first event `viewer` may not
/// see.
pub fn strip_hidden_quotes(event: &mut ChatEvent, viewer: Option<&str>) {
    let mut current = event;
    loop {
        let hidden = current
            .reply_to
            .as_ref()
            .is_some_and(|quoted| !quoted.is_visible_to(viewer));
        if hidden {
            current.reply_to = None;
            return;
        }
        match current.reply_to.as_deref_mut() {
            Some(quoted) => current = quoted,
            None => return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, author: Option<&str>, shadowban: bool) -> ChatEvent {
        ChatEvent {
            id: id.to_string(),
            user_id: author.map(str::to_string),
            body: format!("body of {id}"),
            shadowban,
            ..Default::default()
        }
    }

    fn ids(events: &[ChatEvent]) -> Vec<&str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_keeps_normal_events() {
        let events = vec![event("e1", Some("u1"), false), event("e2", Some("u2"), false)];
        let filtered = filter_shadowbanned(events.clone(), Some("u3"));
        assert_eq!(filtered, events);
    }

    #[test]
    fn test_hides_other_authors_shadowbanned_events() {
        let events = vec![
            event("e1", Some("u2"), true),
            event("e2", Some("u1"), false),
            event("e3", Some("u2"), false),
        ];
        let filtered = filter_shadowbanned(events, Some("u1"));
        assert_eq!(ids(&filtered), vec!["e2", "e3"]);
    }

    #[test]
    fn test_author_sees_own_shadowbanned_events() {
        let events = vec![event("e1", Some("u1"), true), event("e2", Some("u2"), true)];
        let filtered = filter_shadowbanned(events, Some("u1"));
        assert_eq!(ids(&filtered), vec!["e1"]);
    }

    #[test]
    fn test_anonymous_viewer_sees_no_shadowbanned_events() {
        let events = vec![
            event("e1", Some("u1"), true),
            event("e2", Some("u1"), false),
            event("e3", Some("u2"), true),
        ];
        let filtered = filter_shadowbanned(events, None);
        assert_eq!(ids(&filtered), vec!["e2"]);
    }

    #[test]
    fn test_order_and_fields_preserved() {
        let events: Vec<ChatEvent> = (0..20)
            .map(|i| {
                let author = if i % 3 == 0 { "u1" } else { "u2" };
                event(&format!("e{i}"), Some(author), i % 2 == 0)
            })
            .collect();

        let filtered = filter_shadowbanned(events.clone(), Some("u1"));
        let expected: Vec<ChatEvent> = events
            .into_iter()
            .filter(|e| !e.shadowban || e.user_id.as_deref() == Some("u1"))
            .collect();

        assert_eq!(filtered, expected);
    }

    #[test]
    fn test_hidden_quote_removed_from_visible_event() {
        let mut quote = event("q", Some("u3"), false);
        quote.reply_to = Some(Box::new(event("hidden", Some("u2"), true)));

        let filtered = filter_shadowbanned(vec![quote], Some("u1"));

        assert_eq!(ids(&filtered), vec!["q"]);
        assert!(filtered[0].reply_to.is_none());
        assert_eq!(filtered[0].body, "body of q");
    }

    #[test]
    fn test_own_shadowbanned_quote_kept() {
        let mut quote = event("q", Some("u3"), false);
        quote.reply_to = Some(Box::new(event("mine", Some("u2"), true)));

        let filtered = filter_shadowbanned(vec![quote], Some("u2"));

        assert_eq!(filtered[0].reply_to.as_ref().unwrap().id, "mine");
    }

    #[test]
    fn test_nested_quote_chain_cut_at_hidden_link() {
        let mut inner = event("inner", Some("u4"), false);
        inner.reply_to = Some(Box::new(event("hidden", Some("u2"), true)));
        let mut outer = event("outer", Some("u3"), false);
        outer.reply_to = Some(Box::new(inner));

        strip_hidden_quotes(&mut outer, Some("u1"));

        let inner = outer.reply_to.as_ref().unwrap();
        assert_eq!(inner.id, "inner");
        assert!(inner.reply_to.is_none());
    }

    #[test]
    fn test_empty() {
        assert!(filter_shadowbanned(Vec::new(), Some("u1")).is_empty());
    }
}
