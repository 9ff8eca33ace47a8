use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use url::Url;

pub const BTN_PREV: &str = "◀️";
pub const BTN_NEXT: &str = "▶️";
pub const BTN_CHAT: &str = "Начать общение";

/// One row under every card: page back, the external chat link, page
/// forward. Both nav payloads carry the index the card was rendered at.
pub fn profile_keyboard(index: usize, chat_url: &Url) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback(BTN_PREV, format!("prev_{}", index)),
        InlineKeyboardButton::url(BTN_CHAT, chat_url.clone()),
        InlineKeyboardButton::callback(BTN_NEXT, format!("next_{}", index)),
    ]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    fn callback_data(button: &InlineKeyboardButton) -> &str {
        match &button.kind {
            InlineKeyboardButtonKind::CallbackData(data) => data,
            other => panic!("expected a callback button, got {:?}", other),
        }
    }

    #[test]
    fn test_nav_payloads_carry_current_index() {
        let chat_url = Url::parse("https://example.com/chat").unwrap();
        let keyboard = profile_keyboard(4, &chat_url);

        let row = &keyboard.inline_keyboard[0];
        assert_eq!(row.len(), 3);
        assert_eq!(callback_data(&row[0]), "prev_4");
        assert_eq!(callback_data(&row[2]), "next_4");
    }

    #[test]
    fn test_middle_button_is_the_external_link() {
        let chat_url = Url::parse("https://example.com/chat").unwrap();
        let keyboard = profile_keyboard(0, &chat_url);

        let row = &keyboard.inline_keyboard[0];
        assert_eq!(row[1].text, BTN_CHAT);
        match &row[1].kind {
            InlineKeyboardButtonKind::Url(url) => assert_eq!(url, &chat_url),
            other => panic!("expected a url button, got {:?}", other),
        }
    }
}
