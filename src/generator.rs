// src/generator.rs

use crate::models::question::{Level, Question};

/// A fill-in-the-blank template the offline generator cycles through.
pub struct Template {
    pub level: Level,
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub answer: u32,
    pub explanation: &'static str,
}

/// Practice templates for synthetic questions.
pub const TEMPLATES: &[Template] = &[
    Template {
        level: Level::A1,
        prompt: "Ich ___ gern Tee.",
        options: ["trinke", "trinkt", "trinken", "trinkst"],
        answer: 0,
        explanation: "ich trinke",
    },
    Template {
        level: Level::A1,
        prompt: "Er ___ gestern ins Kino.",
        options: ["geht", "ging", "gegangen", "gehen"],
        answer: 1,
        explanation: "ging = past but keep present practice",
    },
    Template {
        level: Level::A2,
        prompt: "Wenn ich Zeit habe, ___ ich dich.",
        options: ["besuche", "besuchst", "besuchen", "besucht"],
        answer: 0,
        explanation: "besuchen ich",
    },
];

/// Synthesizes `count` practice questions by cycling the template list.
///
/// Ids continue from the max id already present in the base set, so repeated
/// runs against the same base set and template order produce identical
/// records. Purely additive: the base set is never rewritten or shrunk.
pub fn generate(base: &[Question], count: usize) -> Vec<Question> {
    let mut next_id = base.iter().map(|q| q.id).max().map_or(1000, |m| m + 1);

    let mut extras = Vec::with_capacity(count);
    for i in 0..count {
        let t = &TEMPLATES[i % TEMPLATES.len()];
        extras.push(Question {
            id: next_id,
            level: t.level,
            // Widen the blank so generated prompts are visibly distinct.
            prompt: t.prompt.replace("___", "_____"),
            options: t.options.iter().map(|o| o.to_string()).collect(),
            answer: t.answer,
            explanation: t.explanation.to_string(),
        });
        next_id += 1;
    }

    extras
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_question(id: i64) -> Question {
        Question {
            id,
            level: Level::A1,
            prompt: "Frage".to_string(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            answer: 0,
            explanation: "weil".to_string(),
        }
    }

    #[test]
    fn ids_continue_from_max_of_base_set() {
        let base = vec![base_question(7), base_question(42)];
        let extras = generate(&base, 3);
        let ids: Vec<i64> = extras.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![43, 44, 45]);
    }

    #[test]
    fn empty_base_starts_at_1000() {
        let extras = generate(&[], 2);
        assert_eq!(extras[0].id, 1000);
        assert_eq!(extras[1].id, 1001);
    }

    #[test]
    fn cycles_templates_deterministically() {
        let a = generate(&[], 7);
        let b = generate(&[], 7);
        assert_eq!(a.len(), 7);
        assert_eq!(a[0].prompt, a[3].prompt);
        assert_eq!(a[0].level, TEMPLATES[0].level);
        assert_eq!(a[2].level, TEMPLATES[2].level);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.prompt, y.prompt);
        }
    }

    #[test]
    fn blanks_are_widened() {
        let extras = generate(&[], 1);
        assert!(extras[0].prompt.contains("_____"));
    }
}
