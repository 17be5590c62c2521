//! The prompt taxonomy: fifteen templates across five cognitive levels.
//!
//! Keys are `level * 100 + n`. Every template carries `{problem_text}`;
//! some carry extra placeholders the synthesizer is expected to fill.

use optima_core::models::PromptTemplate;

const ALL_DOMAINS: &[&str] = &["RP", "NS", "EE", "G", "SP"];

/// Rendered in place of placeholders nobody filled.
pub const UNFILLED_PLACEHOLDER: &str = "(not provided)";

pub static PROMPT_TAXONOMY: [PromptTemplate; 15] = [
    // Level 1: remembering
    PromptTemplate {
        key: 101,
        level: 1,
        level_name: "Remembering",
        name: "Direct Instruction (Zero-Shot)",
        category: "Zero-Shot",
        ccss_domains: ALL_DOMAINS,
        description: "Recall the needed definition/formula, then solve the problem.",
        template: concat!(
            "Solve the problem below.\n",
            "First, state the exact definition/formula you will use (one line).\n",
            "Then substitute the given values and compute the result.\n",
            "Show minimal but correct working.\n\n",
            "Problem:\n{problem_text}\n\n",
            "Final Answer: <value with units if any>"
        ),
        example: "Use the definition/formula, plug in values, and compute the numeric result.",
    },
    PromptTemplate {
        key: 102,
        level: 1,
        level_name: "Remembering",
        name: "Persona-Based Definition",
        category: "Role",
        ccss_domains: ALL_DOMAINS,
        description: "Brief tutor voice: list key facts needed, then solve cleanly.",
        template: concat!(
            "You are a helpful 7th-grade math tutor. Solve the problem below.\n",
            "Step 1) Key facts needed (2-3 short bullets, no fluff).\n",
            "Step 2) Apply the facts to this problem with concise working.\n\n",
            "Problem:\n{problem_text}\n\n",
            "Final Answer: <value with units if any>"
        ),
        example: "List the crucial fact(s) and immediately use them to get the result.",
    },
    PromptTemplate {
        key: 103,
        level: 1,
        level_name: "Remembering",
        name: "Constrained List Generation",
        category: "Formatting",
        ccss_domains: ALL_DOMAINS,
        description: "Very constrained output: formula line + final result line.",
        template: concat!(
            "Solve the problem below.\n",
            "Return ONLY two lines in this exact format:\n",
            "Formula: <single formula you used>\n",
            "Final Answer: <numeric value with units if any>\n\n",
            "Problem:\n{problem_text}"
        ),
        example: "Two lines only: the formula used and the computed answer.",
    },
    // Level 2: understanding
    PromptTemplate {
        key: 201,
        level: 2,
        level_name: "Understanding",
        name: "Explanatory Paraphrasing",
        category: "Explanation",
        ccss_domains: ALL_DOMAINS,
        description: "Explain the idea briefly while solving.",
        template: concat!(
            "Solve the problem below and explain the concept in your own words as you go.\n",
            "1) Brief concept check (1-2 sentences).\n",
            "2) Work the steps to the solution.\n",
            "3) Interpret the numeric result in one everyday sentence.\n\n",
            "Problem:\n{problem_text}\n\n",
            "Final Answer: <value with units if any>"
        ),
        example: "Short conceptual note, then steps, then everyday interpretation and answer.",
    },
    PromptTemplate {
        key: 202,
        level: 2,
        level_name: "Understanding",
        name: "Analogical Mapping (Few-Shot)",
        category: "Few-Shot",
        ccss_domains: ALL_DOMAINS,
        description: "Use a parallel analogy to clarify while solving.",
        template: concat!(
            "Here is an analogy example (for reference):\n",
            "[Example] {example_analogy}\n\n",
            "Now solve the problem below. While solving, craft a parallel analogy to explain ",
            "why each key step makes sense to a 7th-grader.\n\n",
            "Problem:\n{problem_text}\n\n",
            "Final Answer: <value with units if any>"
        ),
        example: "Use the new analogy to illuminate the critical step(s) and compute the result.",
    },
    PromptTemplate {
        key: 203,
        level: 2,
        level_name: "Understanding",
        name: "Flipped Interaction",
        category: "Dialogue",
        ccss_domains: ALL_DOMAINS,
        description: "Ask to clarify if needed, then solve under explicit assumptions.",
        template: concat!(
            "Before solving, ask up to 3 short clarifying questions IF information is missing.\n",
            "If nothing is missing, explicitly state \"No questions, solving now.\"\n",
            "Then clearly state any assumptions and solve to get the numeric result.\n\n",
            "Problem:\n{problem_text}\n\n",
            "Final Answer: <value with units if any>"
        ),
        example: "Diagnose info needs, state assumptions, compute the answer.",
    },
    // Level 3: applying
    PromptTemplate {
        key: 301,
        level: 3,
        level_name: "Applying",
        name: "Step-by-Step CoT (Zero-Shot)",
        category: "CoT",
        ccss_domains: ALL_DOMAINS,
        description: "Explicit steps and reasoning to a correct result.",
        template: concat!(
            "Solve the following problem. Show your work step-by-step with brief reasoning ",
            "for each step.\n\n",
            "Problem:\n{problem_text}\n\n",
            "Final Answer: <value with units if any>"
        ),
        example: "Clear, ordered steps ending in the computed result.",
    },
    PromptTemplate {
        key: 302,
        level: 3,
        level_name: "Applying",
        name: "Contextual Few-Shot CoT",
        category: "Few-Shot CoT",
        ccss_domains: ALL_DOMAINS,
        description: "Mimic the structure of a worked example to solve.",
        template: concat!(
            "Here is a worked example to follow:\n{few_shot_example}\n\n",
            "Now solve this new problem using the SAME structure of steps and explanations:\n",
            "{problem_text}\n\n",
            "Final Answer: <value with units if any>"
        ),
        example: "Mirror the example's flow; compute the new answer.",
    },
    PromptTemplate {
        key: 303,
        level: 3,
        level_name: "Applying",
        name: "Program-Aided Logic (PAL)",
        category: "Tool-Use",
        ccss_domains: &["RP", "NS", "EE"],
        description: "Translate to Python that prints only the final numeric answer.",
        template: concat!(
            "Translate the word problem into Python code that, when executed, prints ONLY the ",
            "final numeric answer (no extra text).\n",
            "After the code block, include one sentence explaining why the computation is correct.\n\n",
            "Problem:\n{problem_text}"
        ),
        example: "Produce minimal, correct code and a one-sentence rationale.",
    },
    // Level 4: analyzing
    PromptTemplate {
        key: 401,
        level: 4,
        level_name: "Analyzing",
        name: "Compare Solution Methods",
        category: "Analysis",
        ccss_domains: &["RP", "NS", "EE", "G"],
        description: "Solve by Method A and Method B; compare and conclude.",
        template: concat!(
            "Problem:\n{problem_text}\n\n",
            "Solve the problem twice:\n",
            "- Method A: {method_a}\n",
            "- Method B: {method_b}\n\n",
            "Show concise working for each, confirm both give the same result, then compare ",
            "when each method is preferable.\n\n",
            "Final Answer: <value with units if any>"
        ),
        example: "Two correct paths, same result, short comparison.",
    },
    PromptTemplate {
        key: 402,
        level: 4,
        level_name: "Analyzing",
        name: "Error Identification & Correction",
        category: "Diagnostics",
        ccss_domains: ALL_DOMAINS,
        description: "Find the exact error, fix it, and solve correctly.",
        template: concat!(
            "A student attempted this problem but made a mistake.\n",
            "Problem:\n{problem_text}\n\n",
            "Student work:\n{student_work}\n\n",
            "1) Point to the exact step that is wrong.\n",
            "2) Explain the misconception briefly.\n",
            "3) Provide the correct step-by-step solution to the final result.\n\n",
            "Final Answer: <value with units if any>"
        ),
        example: "Pinpoint the error, explain it, give the corrected solution and result.",
    },
    PromptTemplate {
        key: 403,
        level: 4,
        level_name: "Analyzing",
        name: "Generated-Knowledge Decomposition",
        category: "Plan-and-Solve",
        ccss_domains: &["G", "SP", "RP"],
        description: "List required knowledge, decompose, then solve fully.",
        template: concat!(
            "Step 1: Knowledge List. List all formulas/facts needed (bullets only).\n",
            "Step 2: Decomposition. Outline sub-problems in order (numbered list).\n",
            "Step 3: Execute. Solve each sub-problem and combine to get the final result.\n\n",
            "Problem:\n{problem_text}\n\n",
            "Final Answer: <value with units if any>"
        ),
        example: "Knowledge, plan, execution, combined numeric result.",
    },
    // Level 5: evaluating and creating
    PromptTemplate {
        key: 501,
        level: 5,
        level_name: "Evaluating/Creating",
        name: "Self-Consistency + Justification",
        category: "SC-CoT",
        ccss_domains: &["RP", "NS", "EE"],
        description: "Propose 3 valid strategies, pick one, and solve with justification.",
        template: concat!(
            "For the problem below, do the following:\n",
            "1) Propose three different valid solution strategies (bulleted).\n",
            "2) Briefly evaluate them and choose the most efficient for this case.\n",
            "3) Solve the problem using the chosen strategy with clear steps.\n",
            "4) Give a one-line verification/check.\n\n",
            "Problem:\n{problem_text}\n\n",
            "Final Answer: <value with units if any>"
        ),
        example: "List 3 ways, choose one, solve, quick sanity check.",
    },
    PromptTemplate {
        key: 502,
        level: 5,
        level_name: "Evaluating/Creating",
        name: "Hypothesis Generation & Design (ReAct-style)",
        category: "Reason+Act",
        ccss_domains: &["SP"],
        description: "Design the test AND compute/estimate the answer for the given context.",
        template: concat!(
            "You are a student scientist.\n",
            "Hypothesis: {hypothesis}\n\n",
            "Part A: Design. Describe a simulation/experiment to test the hypothesis ",
            "(steps, data, decision rule).\n",
            "Part B: Solve. For the problem below, compute (or reasonably estimate) the ",
            "probability/value implied by the context, showing key steps.\n\n",
            "Context / Problem:\n{problem_text}\n\n",
            "Final Answer: <numeric probability/value>"
        ),
        example: "Design the test AND produce the numerical result for the stated context.",
    },
    PromptTemplate {
        key: 503,
        level: 5,
        level_name: "Evaluating/Creating",
        name: "Novel Problem Formulation (Meta-Prompting) + Solve",
        category: "Creation",
        ccss_domains: &["EE", "RP"],
        description: "Create a word problem for the given equation/inequality AND solve it.",
        template: concat!(
            "Create an original, real-world word problem for a 7th-grader that can be modeled ",
            "by the equation/inequality:\n",
            "{problem_text}\n",
            "State the problem you created, then solve the equation/inequality, interpret the ",
            "solution in context, and give the final numeric answer.\n\n",
            "Final Answer: <value with units if any>"
        ),
        example: "Write a short scenario matching the equation, solve it, and interpret the result.",
    },
];

/// Every entry in key order.
pub fn entries() -> &'static [PromptTemplate] {
    &PROMPT_TAXONOMY
}

pub fn get(key: u16) -> Option<&'static PromptTemplate> {
    PROMPT_TAXONOMY.iter().find(|entry| entry.key == key)
}

/// Entries for one cognitive level.
pub fn by_level(level: u8) -> impl Iterator<Item = &'static PromptTemplate> {
    PROMPT_TAXONOMY.iter().filter(move |entry| entry.level == level)
}

/// Local rendering used when the synthesizer is unavailable.
///
/// `{problem_text}` is substituted; any other `{name}` placeholder becomes
/// [`UNFILLED_PLACEHOLDER`]. Braces that do not enclose an identifier are
/// left untouched.
pub fn render_template(entry: &PromptTemplate, problem_text: &str) -> String {
    let template = entry.template;
    let mut out = String::with_capacity(template.len() + problem_text.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if is_placeholder_name(&after[..close]) => {
                if &after[..close] == "problem_text" {
                    out.push_str(problem_text);
                } else {
                    out.push_str(UNFILLED_PLACEHOLDER);
                }
                rest = &after[close + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_sorted_unique_and_level_coded() {
        let keys: Vec<u16> = entries().iter().map(|e| e.key).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(keys, sorted);
        for entry in entries() {
            assert_eq!(entry.key / 100, u16::from(entry.level));
            assert!(entry.template.contains("{problem_text}"), "{}", entry.key);
        }
        assert_eq!(by_level(3).count(), 3);
    }

    #[test]
    fn render_fills_problem_and_neutralizes_other_placeholders() {
        let entry = get(401).unwrap();
        let rendered = render_template(entry, "Find 15% of 80.");
        assert!(rendered.starts_with("Problem:\nFind 15% of 80."));
        assert!(rendered.contains("- Method A: (not provided)"));
        assert!(!rendered.contains('{'));
    }

    #[test]
    fn render_keeps_literal_braces_in_problem() {
        let entry = get(301).unwrap();
        let rendered = render_template(entry, "Solve for x in {2x = 4}");
        assert!(rendered.contains("{2x = 4}"));
    }

    #[test]
    fn unknown_key_is_none() {
        assert!(get(999).is_none());
    }
}
