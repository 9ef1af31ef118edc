/// Number of weeks in every generated plan.
pub const PLAN_WEEKS: usize = 4;
/// Only the first few gaps feed the plan.
pub const MAX_PLANNED_SKILLS: usize = 6;

pub const GENERIC_PLAN: [&str; PLAN_WEEKS] = [
    "Week 1: Build a small capstone project combining your strengths.",
    "Week 2: Polish GitHub repo and write README + demo video.",
    "Week 3: Apply to 10 roles and tailor your resume.",
    "Week 4: Prepare for interviews (DS/Algo/basic system design).",
];

/// Four-week study plan for the missing skills.
///
/// Week `i` covers `short[i * c .. i * c + c]` with `c = max(1, n / 4)` over the first six
/// gaps. Skills past `4 * c` do not appear, e.g. six gaps give one skill per week and the
/// last two are left out.
pub fn action_plan(missing: &[String]) -> Vec<String> {
    if missing.is_empty() {
        return GENERIC_PLAN.iter().map(|s| s.to_string()).collect();
    }
    let short = &missing[..missing.len().min(MAX_PLANNED_SKILLS)];
    let chunk_size = (short.len() / PLAN_WEEKS).max(1);

    (0..PLAN_WEEKS)
        .map(|week| {
            let start = (week * chunk_size).min(short.len());
            let end = (start + chunk_size).min(short.len());
            let chunk = &short[start..end];
            if chunk.is_empty() {
                format!("Week {}: Reinforce earlier topics and build mini-projects.", week + 1)
            } else {
                format!(
                    "Week {}: Learn & practice: {} (2-4 small exercises + 1 mini-project task)",
                    week + 1,
                    chunk.join(", ")
                )
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(v: &[&str]) -> Vec<String> { v.iter().map(|s| s.to_string()).collect() }

    #[test]
    fn no_gaps_gives_generic_plan() {
        assert_eq!(action_plan(&[]), GENERIC_PLAN.to_vec());
    }

    #[test]
    fn two_gaps_leave_two_reinforce_weeks() {
        let plan = action_plan(&owned(&["pandas", "machine learning"]));
        assert_eq!(plan.len(), 4);
        assert_eq!(plan[0], "Week 1: Learn & practice: pandas (2-4 small exercises + 1 mini-project task)");
        assert_eq!(plan[1], "Week 2: Learn & practice: machine learning (2-4 small exercises + 1 mini-project task)");
        assert_eq!(plan[2], "Week 3: Reinforce earlier topics and build mini-projects.");
        assert_eq!(plan[3], "Week 4: Reinforce earlier topics and build mini-projects.");
    }

    #[test]
    fn six_gaps_drop_the_last_two() {
        let plan = action_plan(&owned(&["a1", "a2", "a3", "a4", "a5", "a6"]));
        assert_eq!(plan.len(), 4);
        assert!(plan[3].contains("a4"));
        assert!(plan.iter().all(|l| !l.contains("a5") && !l.contains("a6")));
    }

    #[test]
    fn eight_gaps_are_cut_to_six() {
        let plan = action_plan(&owned(&["s1", "s2", "s3", "s4", "s5", "s6", "s7", "s8"]));
        assert!(plan.iter().all(|l| !l.contains("s7")));
        assert_eq!(plan.len(), 4);
    }

    #[test]
    fn four_gaps_one_per_week() {
        let plan = action_plan(&owned(&["w", "x", "y", "z"]));
        assert!(plan[0].contains(": w ("));
        assert!(plan[3].contains(": z ("));
    }
}
