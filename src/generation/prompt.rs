//! Prompt of the group-order benchmark

use crate::config::GroupBenchSettings;
use crate::dictionary::GroupMap;

/// Full task prompt: rules header followed by "word (Group g)" lines
pub fn group_bench_prompt(settings: &GroupBenchSettings, map: &GroupMap) -> String {
    let sentences = settings.num_sentences;
    let order = &settings.group_order;

    let words = number_word(order.len());

    let mut prompt = format!(
        "### TASK ###\n\
         You must generate exactly {sentences} unique {words}-word sentences.\n\
         \n\
         ### RULES ###\n\
         1.  **Uniqueness**: EVERY word you use across ALL {sentences} sentences must be unique. No word can be repeated.\n\
         2.  **Word Source**: You can ONLY use words from the \"Word List\" provided below. Do not use any other words.\n\
         3.  **Sentence Structure**: Each sentence must contain exactly {words} words.\n\
         4.  **Group Order**: The words in each sentence must follow a specific group order. {order}.\n\
         5.  **Output Format**: Present your answer as a numbered list of {sentences} sentences. Do not include group numbers or any other explanations in your final output.\n\
         6.  **No Tool Usage**: Do not use any tools or code to accomplish the task.\n\
         \n\
         ### WORD LIST ###\n\
         The list below contains {count} words. Each word is followed by its group number in parentheses, like \"word (Group X)\". You must use this list to form your sentences according to the rules above.\n\
         ---\n",
        sentences = sentences,
        words = words,
        order = order_clause(order),
        count = map.len(),
    );

    let lines: Vec<String> = map
        .iter()
        .map(|(word, group)| format!("{} (Group {})", word, group))
        .collect();
    prompt.push_str(&lines.join("\n"));

    prompt
}

/// "The first word must be from Group 4, the second from Group 1, ..."
fn order_clause(order: &[u32]) -> String {
    const ORDINALS: [&str; 8] = [
        "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth",
    ];

    let parts: Vec<String> = order
        .iter()
        .enumerate()
        .map(|(i, group)| {
            let ordinal = ORDINALS
                .get(i)
                .map(|s| s.to_string())
                .unwrap_or_else(|| format!("{}th", i + 1));
            if i == 0 {
                format!("The {} word must be from Group {}", ordinal, group)
            } else {
                format!("the {} from Group {}", ordinal, group)
            }
        })
        .collect();

    match parts.len() {
        0 => String::new(),
        1 => parts[0].clone(),
        n => format!("{}, and {}", parts[..n - 1].join(", "), parts[n - 1]),
    }
}

fn number_word(n: usize) -> String {
    const WORDS: [&str; 9] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight",
    ];
    WORDS
        .get(n)
        .map(|s| s.to_string())
        .unwrap_or_else(|| n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_clause() {
        assert_eq!(
            order_clause(&[4, 1, 3, 2]),
            "The first word must be from Group 4, the second from Group 1, the third from Group 3, and the fourth from Group 2"
        );
        assert_eq!(order_clause(&[2]), "The first word must be from Group 2");
    }

    #[test]
    fn test_prompt_layout() {
        let settings = GroupBenchSettings::default();
        let map: GroupMap = [("abcde", 2), ("fghij", 4)].into_iter().collect();
        let prompt = group_bench_prompt(&settings, &map);

        assert!(prompt.starts_with("### TASK ###\nYou must generate exactly 50 unique four-word sentences.\n"));
        assert!(prompt.contains("sentences.\n\n### RULES ###\n1.  **Uniqueness**"));
        assert!(prompt.contains("across ALL 50 sentences"));
        assert!(prompt.contains(
            "4.  **Group Order**: The words in each sentence must follow a specific group order. The first word must be from Group 4, the second from Group 1, the third from Group 3, and the fourth from Group 2.\n"
        ));
        assert!(prompt.contains("task.\n\n### WORD LIST ###\n"));
        assert!(prompt.contains("The list below contains 2 words."));
        assert!(prompt.ends_with("---\nabcde (Group 2)\nfghij (Group 4)"));
    }
}
