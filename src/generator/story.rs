use crate::i18n::locale;
use crate::models::{AttributeSet, GhostType, Language, TransactionRecord};

use super::{attributes, GenerationError, TxFacts};

pub fn compose_story(
    tx: &TransactionRecord,
    ghost_type: GhostType,
    lang: Language,
    now: i64,
) -> Result<String, GenerationError> {
    let facts = TxFacts::parse(tx)?;
    let attributes = attributes::derive_from(&facts, now);
    Ok(story_from(
        &attributes,
        &tx.gas_used,
        ghost_type,
        facts.hash_num,
        lang,
    ))
}

pub(crate) fn story_from(
    attributes: &AttributeSet,
    gas_used: &str,
    ghost_type: GhostType,
    hash_num: u64,
    lang: Language,
) -> String {
    let templates = locale(lang).stories.templates(ghost_type);
    let template = templates[(hash_num % templates.len() as u64) as usize];
    render(template, attributes.age, &attributes.value, gas_used)
}

fn render(template: &str, age: u64, value: &str, gas_used: &str) -> String {
    template
        .replace("{age}", &age.to_string())
        .replace("{value}", value)
        .replace("{gasUsed}", gas_used)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::test_support::*;

    #[test]
    fn placeholders_are_substituted() {
        assert_eq!(
            render("{age} days, {value} ETH, {gasUsed} gas", 12, "0.5", "21000"),
            "12 days, 0.5 ETH, 21000 gas"
        );
        assert_eq!(render("no placeholders", 1, "1", "1"), "no placeholders");
    }

    #[test]
    fn template_is_selected_by_hash() {
        let mut tx = sample_tx();
        tx.value = "1500000000000000000".to_string();
        // Prefix 1 selects the second template.
        tx.hash = hash_with_prefix(1);
        let story = compose_story(&tx, GhostType::InsufficientBalance, Language::En, NOW).unwrap();
        assert_eq!(
            story,
            "30 days ago, I tried one last move... 1.5 ETH was all that remained."
        );

        let story = compose_story(&tx, GhostType::InsufficientBalance, Language::Es, NOW).unwrap();
        assert_eq!(
            story,
            "Hace 30 días, intenté un último movimiento... 1.5 ETH era todo lo que quedaba."
        );
    }

    #[test]
    fn gas_used_is_rendered_verbatim() {
        let mut tx = sample_tx();
        tx.hash = hash_with_prefix(0);
        tx.gas_used = "48213".to_string();
        let story = compose_story(&tx, GhostType::OutOfGas, Language::En, NOW).unwrap();
        assert!(story.contains("48213 energy consumed"));
    }

    #[test]
    fn no_placeholder_survives_any_template() {
        let tx = sample_tx();
        for lang in [Language::Es, Language::En] {
            for ghost_type in GhostType::ALL {
                for prefix in 0..3 {
                    let mut tx = tx.clone();
                    tx.hash = hash_with_prefix(prefix);
                    let story = compose_story(&tx, ghost_type, lang, NOW).unwrap();
                    assert!(!story.contains('{'), "{story}");
                }
            }
        }
    }
}
