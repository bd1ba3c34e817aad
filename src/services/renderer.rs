//! View-model-to-markup rendering.
//!
//! [`cards_markup`] is pure; the `render*` functions write its output into a
//! [`RenderTarget`], always replacing what was there.

use crate::{
    models::MovieCard,
    services::container::{ContainerState, RenderTarget},
};

/// Renders `cards` (or `empty_message` when there are none) into `target`.
///
/// Returns the state written, or `None` if the target refused the write.
pub fn render(
    target: &impl RenderTarget,
    cards: &[MovieCard],
    empty_message: &str,
) -> Option<ContainerState> {
    let state = if cards.is_empty() {
        ContainerState::SuccessEmpty
    } else {
        ContainerState::SuccessWithData
    };
    commit(target, cards_markup(cards, empty_message), state)
}

pub fn render_loading(target: &impl RenderTarget, text: &str) -> Option<ContainerState> {
    commit(target, message_markup(text), ContainerState::Loading)
}

pub fn render_error(target: &impl RenderTarget, text: &str) -> Option<ContainerState> {
    commit(target, message_markup(text), ContainerState::Error)
}

/// Markup for a card collection, or a single message paragraph when empty
pub fn cards_markup(cards: &[MovieCard], empty_message: &str) -> String {
    if cards.is_empty() {
        return message_markup(empty_message);
    }

    cards.iter().map(card_markup).collect::<Vec<_>>().join("")
}

fn card_markup(card: &MovieCard) -> String {
    let title = escape_html(&card.title);
    let rating = card
        .rating
        .map(|rating| format!("<br>⭐ {}", rating))
        .unwrap_or_default();

    format!(
        "<div class=\"movie\">\n  <img src=\"{}\" alt=\"{}\">\n  <p>{}{}</p>\n</div>\n",
        escape_html(&card.poster_url),
        title,
        title,
        rating
    )
}

pub fn message_markup(text: &str) -> String {
    format!("<p>{}</p>", escape_html(text))
}

pub fn escape_html(text: &str) -> String {
    v_htmlescape::escape(text).to_string()
}

fn commit(target: &impl RenderTarget, markup: String, state: ContainerState) -> Option<ContainerState> {
    target.replace(markup, state).then_some(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::container::Container;

    #[test]
    fn test_empty_cards_render_message() {
        assert_eq!(
            cards_markup(&[], "No recommendations available."),
            "<p>No recommendations available.</p>"
        );
    }

    #[test]
    fn test_rated_card_shows_star() {
        let card = MovieCard::new("Heat", "heat.jpg").with_rating(Some(4.0));
        let markup = cards_markup(&[card], "unused");
        assert!(markup.contains(r#"<img src="heat.jpg" alt="Heat">"#));
        assert!(markup.contains("<p>Heat<br>⭐ 4</p>"));
    }

    #[test]
    fn test_unrated_card_has_no_star() {
        let markup = cards_markup(&[MovieCard::new("X", "pX")], "unused");
        assert!(markup.contains("<p>X</p>"));
        assert!(!markup.contains('⭐'));
    }

    #[test]
    fn test_fractional_rating_formatting() {
        let card = MovieCard::new("A", "p").with_rating(Some(3.5));
        assert!(cards_markup(&[card], "").contains("⭐ 3.5"));
    }

    #[test]
    fn test_one_unit_per_card() {
        let cards = vec![MovieCard::new("A", "pA"), MovieCard::new("B", "pB")];
        assert_eq!(cards_markup(&cards, "").matches("class=\"movie\"").count(), 2);
    }

    #[test]
    fn test_titles_are_escaped() {
        let markup = cards_markup(&[MovieCard::new("Tom & \"Jerry\" <3", "p")], "");
        assert!(markup.contains("Tom &amp; &quot;Jerry&quot; &lt;3"));
        assert!(!markup.contains("<3"));
    }

    #[test]
    fn test_poster_url_is_escaped() {
        let markup = cards_markup(&[MovieCard::new("A", "x\" onerror=\"y")], "");
        assert!(!markup.contains("x\" onerror"));
        assert!(markup.contains("&quot; onerror=&quot;y"));
    }

    #[test]
    fn test_cards_are_concatenated_in_order() {
        let cards = vec![MovieCard::new("First", "p1"), MovieCard::new("Second", "p2")];
        let markup = cards_markup(&cards, "");
        assert!(markup.find("First").unwrap() < markup.find("Second").unwrap());
        assert!(markup.ends_with("</div>\n"));
    }

    #[test]
    fn test_render_replaces_container_content() {
        let container = Container::new("ratingsContainer");
        assert_eq!(
            render_loading(&container, "Loading ratings..."),
            Some(ContainerState::Loading)
        );
        assert_eq!(
            render(&container, &[MovieCard::new("A", "pA")], "none"),
            Some(ContainerState::SuccessWithData)
        );

        let snapshot = container.snapshot();
        assert!(!snapshot.markup.contains("Loading"));
        assert_eq!(snapshot.state, ContainerState::SuccessWithData);

        assert_eq!(render(&container, &[], "none"), Some(ContainerState::SuccessEmpty));
        assert_eq!(container.snapshot().markup, "<p>none</p>");
    }

    #[test]
    fn test_render_error_state() {
        let container = Container::new("recsContainer");
        assert_eq!(
            render_error(&container, "Error loading recommendations."),
            Some(ContainerState::Error)
        );
        assert_eq!(container.snapshot().markup, "<p>Error loading recommendations.</p>");
    }
}
