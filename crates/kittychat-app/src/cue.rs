/// Cosmetic cue derived from the assistant's reply text. Picks the emoji
/// shown next to the reply; nothing else depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Greeting,
    Laughter,
    Affection,
    Sad,
    Neutral,
}

impl Cue {
    pub fn emoji(&self) -> &'static str {
        match self {
            Cue::Greeting => "👋",
            Cue::Laughter => "😹",
            Cue::Affection => "💖",
            Cue::Sad => "😿",
            Cue::Neutral => "😺",
        }
    }
}

/// Classify a reply into a cue by keyword sniffing. Pure function; first
/// matching category wins.
pub fn classify(text: &str) -> Cue {
    let lower = text.to_lowercase();

    const GREETINGS: &[&str] = &["hola", "holaaa", "buen día", "buenas"];
    const LAUGHTER: &[&str] = &["jaja", "jeje", "lol"];
    const AFFECTION: &[&str] = &["te quiero", "amor", "corazón", "💖", "❤"];
    const SAD: &[&str] = &["triste", "perdón", "lo siento", "😿"];

    if GREETINGS.iter().any(|k| lower.contains(k)) {
        Cue::Greeting
    } else if LAUGHTER.iter().any(|k| lower.contains(k)) {
        Cue::Laughter
    } else if AFFECTION.iter().any(|k| lower.contains(k)) {
        Cue::Affection
    } else if SAD.iter().any(|k| lower.contains(k)) {
        Cue::Sad
    } else {
        Cue::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_keywords() {
        assert_eq!(classify("¡Holaaa! ¿Cómo estás?"), Cue::Greeting);
        assert_eq!(classify("Buenas tardes"), Cue::Greeting);
    }

    #[test]
    fn test_laughter_keywords() {
        assert_eq!(classify("jajaja qué ocurrente"), Cue::Laughter);
    }

    #[test]
    fn test_affection_keywords() {
        assert_eq!(classify("Sos un amor ✨"), Cue::Affection);
    }

    #[test]
    fn test_sad_keywords() {
        assert_eq!(classify("Lo siento mucho..."), Cue::Sad);
    }

    #[test]
    fn test_neutral_fallback() {
        assert_eq!(classify("El resultado es 42."), Cue::Neutral);
    }

    #[test]
    fn test_first_category_wins() {
        // Greeting takes precedence over laughter
        assert_eq!(classify("hola jajaja"), Cue::Greeting);
    }
}
