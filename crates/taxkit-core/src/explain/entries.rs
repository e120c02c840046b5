//! Static explanation entries: ten tax topics, each authored at three
//! proficiency tiers, plus the hand-authored related-topic adjacency table.
//!
//! The table is built once behind a `LazyLock` and read-only afterwards, so
//! it can be shared across concurrent callers without locking. Insertion
//! order is the order `available_topics` reports.

use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::models::ProficiencyLevel;

/// Upper bound on related topics attached to any explanation.
pub const MAX_RELATED_TOPICS: usize = 3;

/// One authored explanation variant.
pub struct EntrySpec {
    pub title: &'static str,
    pub body: &'static str,
    pub key_points: &'static [&'static str],
}

/// A topic with its three tiers and its adjacency list.
pub struct TopicSpec {
    pub novice: EntrySpec,
    pub intermediate: EntrySpec,
    pub expert: EntrySpec,
    pub related: &'static [&'static str],
}

impl TopicSpec {
    pub fn for_level(&self, level: ProficiencyLevel) -> &EntrySpec {
        match level {
            ProficiencyLevel::Novice => &self.novice,
            ProficiencyLevel::Intermediate => &self.intermediate,
            ProficiencyLevel::Expert => &self.expert,
        }
    }
}

pub static TOPIC_TABLE: LazyLock<IndexMap<&'static str, TopicSpec>> = LazyLock::new(|| {
    let mut table = IndexMap::new();

    table.insert(
        "agi",
        TopicSpec {
            novice: EntrySpec {
                title: "What is AGI?",
                body: "AGI (Adjusted Gross Income) is your total income minus certain \
                       deductions. Think of it as your income after some allowed \
                       subtractions, but before the standard or itemized deductions.",
                key_points: &[
                    "Total income minus specific adjustments",
                    "Calculated before the standard or itemized deduction",
                    "Many tax benefits depend on it",
                ],
            },
            intermediate: EntrySpec {
                title: "Adjusted Gross Income",
                body: "AGI is your gross income adjusted by specific deductions like \
                       educator expenses, student loan interest, and IRA contributions. \
                       It's a key number used to determine eligibility for many tax \
                       benefits.",
                key_points: &[
                    "Gross income minus above-the-line adjustments",
                    "Gates eligibility for many credits and deductions",
                    "Appears before the standard/itemized deduction choice",
                ],
            },
            expert: EntrySpec {
                title: "AGI - Adjusted Gross Income",
                body: "AGI = Gross Income - Above-the-line deductions (Schedule 1 \
                       adjustments). Critical threshold for phase-outs of credits \
                       (EITC, CTC, etc.) and deduction limitations (SALT cap impact).",
                key_points: &[
                    "Schedule 1 adjustments reduce gross income to AGI",
                    "Drives credit phase-out thresholds",
                    "Basis for medical expense and charitable limits",
                ],
            },
            related: &["standard_deduction", "itemized_deductions", "credits"],
        },
    );

    table.insert(
        "standard_deduction",
        TopicSpec {
            novice: EntrySpec {
                title: "What is the Standard Deduction?",
                body: "The standard deduction is an amount the IRS lets you subtract \
                       from your income without needing receipts. Most people use this \
                       instead of itemizing.",
                key_points: &[
                    "Reduces your taxable income automatically",
                    "No need to track expenses",
                    "Amount varies by filing status",
                    "Most taxpayers use this instead of itemizing",
                ],
            },
            intermediate: EntrySpec {
                title: "Standard Deduction",
                body: "The standard deduction is a fixed amount based on filing status \
                       that reduces taxable income. For 2024: $14,600 (single), \
                       $29,200 (married filing jointly), $21,900 (head of household). \
                       Use it if it exceeds your itemized deductions.",
                key_points: &[
                    "Fixed amount keyed to filing status",
                    "2024: $14,600 / $29,200 / $21,900",
                    "Compare against itemized total before electing",
                ],
            },
            expert: EntrySpec {
                title: "Standard Deduction - 2024",
                body: "2024 standard deductions indexed to inflation. Compare against \
                       Schedule A itemized total (SALT capped at $10K, mortgage \
                       interest, charitable contributions). Additional amounts for age \
                       65+ and blind taxpayers.",
                key_points: &[
                    "Single: $14,600",
                    "MFJ: $29,200",
                    "HOH: $21,900",
                    "Additional amount for 65+ or blind taxpayers",
                ],
            },
            related: &["itemized_deductions", "agi", "filing_status"],
        },
    );

    table.insert(
        "marginal_rate",
        TopicSpec {
            novice: EntrySpec {
                title: "Your Marginal Tax Rate",
                body: "Your marginal tax rate is the percentage of tax you pay on your \
                       next dollar of income. It's the highest tax bracket you reach.",
                key_points: &[
                    "The rate on your next dollar earned",
                    "Set by the highest bracket you reach",
                    "Not the rate paid on all your income",
                ],
            },
            intermediate: EntrySpec {
                title: "Marginal Rate",
                body: "The marginal rate is the tax rate applied to your last dollar of \
                       taxable income. Due to progressive brackets, you pay different \
                       rates on different portions of income.",
                key_points: &[
                    "Applies to the last dollar of taxable income",
                    "Income is taxed in layers, each at its own rate",
                    "Always at least your effective rate",
                ],
            },
            expert: EntrySpec {
                title: "Marginal Rate Analysis",
                body: "Marginal rate = highest bracket reached. Critical for tax \
                       planning: deduction timing and income recognition decisions are \
                       valued at the marginal rate, and bracket-boundary positioning \
                       determines the payoff of acceleration or deferral.",
                key_points: &[
                    "Highest statutory bracket reached",
                    "Values each incremental deduction dollar",
                    "Bracket-boundary positioning drives timing strategy",
                ],
            },
            related: &["effective_rate", "progressive_brackets", "tax_planning"],
        },
    );

    table.insert(
        "effective_rate",
        TopicSpec {
            novice: EntrySpec {
                title: "Your Effective Tax Rate",
                body: "Your effective tax rate is the overall percentage of your income \
                       that goes to taxes. It's usually lower than your marginal rate \
                       because of how tax brackets work.",
                key_points: &[
                    "Total tax divided by your income",
                    "Usually lower than your marginal rate",
                    "The truest single measure of your tax burden",
                ],
            },
            intermediate: EntrySpec {
                title: "Effective Rate",
                body: "Effective rate = total tax / gross income. Always lower than the \
                       marginal rate under progressive brackets. Useful metric for \
                       comparing tax burden across income levels or years.",
                key_points: &[
                    "Total tax / gross income",
                    "Blends all bracket rates you passed through",
                    "Good for year-over-year comparisons",
                ],
            },
            expert: EntrySpec {
                title: "Effective Rate Calculation",
                body: "Effective rate = total federal liability / gross income. More \
                       accurate than the marginal rate for multi-year planning; the \
                       spread between the two quantifies how much income is absorbed by \
                       the lower brackets and deductions.",
                key_points: &[
                    "Liability divided by gross income",
                    "Spread vs marginal quantifies bracket absorption",
                    "Preferred metric for multi-year planning",
                ],
            },
            related: &["marginal_rate", "progressive_brackets"],
        },
    );

    table.insert(
        "itemized_deductions",
        TopicSpec {
            novice: EntrySpec {
                title: "Itemized Deductions",
                body: "Itemized deductions let you list specific expenses (like \
                       mortgage interest, charitable donations, medical expenses) to \
                       reduce your taxable income. Only worth it if they exceed your \
                       standard deduction.",
                key_points: &[
                    "List actual expenses instead of the standard amount",
                    "Mortgage interest, donations, medical costs",
                    "Only worthwhile above the standard deduction",
                ],
            },
            intermediate: EntrySpec {
                title: "Itemizing on Schedule A",
                body: "Schedule A deductions include mortgage interest, state and local \
                       taxes (SALT, capped at $10K), medical expenses above 7.5% of \
                       AGI, and charitable contributions. Beneficial when the total \
                       exceeds your standard deduction.",
                key_points: &[
                    "SALT capped at $10,000",
                    "Medical expenses above 7.5% of AGI",
                    "Elect whichever of itemized/standard is larger",
                ],
            },
            expert: EntrySpec {
                title: "Itemized Deductions - Schedule A",
                body: "Post-TCJA landscape: the SALT cap makes itemizing harder in \
                       high-tax states. Bunching strategies concentrate charitable \
                       contributions into alternating years; mortgage interest is \
                       limited to $750K of acquisition debt.",
                key_points: &[
                    "SALT cap compresses the itemizing population",
                    "Bunching concentrates deductions into election years",
                    "Acquisition-debt limit: $750K",
                ],
            },
            related: &["standard_deduction", "agi", "deductions_vs_credits"],
        },
    );

    table.insert(
        "progressive_brackets",
        TopicSpec {
            novice: EntrySpec {
                title: "Understanding Tax Brackets",
                body: "Tax brackets mean you pay different rates on different portions \
                       of your income. As you earn more, only the extra money is taxed \
                       at the higher rate, not all your income.",
                key_points: &[
                    "Only the money in each bracket is taxed at that rate",
                    "Lower income is always taxed at lower rates",
                    "Moving up a bracket doesn't raise tax on previous income",
                ],
            },
            intermediate: EntrySpec {
                title: "Progressive Brackets",
                body: "The U.S. uses marginal tax brackets: income is taxed in layers. \
                       2024 has 7 brackets (10%, 12%, 22%, 24%, 32%, 35%, 37%). Each \
                       bracket applies only to income within that range.",
                key_points: &[
                    "Seven brackets from 10% to 37%",
                    "Each rate applies only within its range",
                    "Thresholds vary by filing status",
                ],
            },
            expert: EntrySpec {
                title: "Progressive Rate Structure",
                body: "The progressive structure creates non-linear effective rates. \
                       Planning opportunities concentrate at bracket boundaries, where \
                       the value of shifting a marginal dollar of income or deduction \
                       changes discontinuously.",
                key_points: &[
                    "Effective rate is a non-linear function of income",
                    "Boundary positioning changes marginal payoffs",
                    "Slab decomposition reconstructs total liability exactly",
                ],
            },
            related: &["marginal_rate", "effective_rate", "tax_planning"],
        },
    );

    table.insert(
        "credits",
        TopicSpec {
            novice: EntrySpec {
                title: "Tax Credits: Direct Reductions",
                body: "Tax credits are better than deductions - they directly reduce \
                       the tax you owe, dollar-for-dollar. Some credits like the Child \
                       Tax Credit or Earned Income Credit can be very valuable.",
                key_points: &[
                    "Dollar-for-dollar reduction in tax owed",
                    "Better than deductions of the same size",
                    "Common credits: Child Tax Credit, EITC, education credits",
                ],
            },
            intermediate: EntrySpec {
                title: "Tax Credits",
                body: "Credits reduce tax liability directly, versus deductions that \
                       reduce taxable income. Key credits: CTC ($2,000 per child), \
                       EITC (income-based), education credits (AOTC, LLC), dependent \
                       care, and energy credits.",
                key_points: &[
                    "Applied after the tax calculation",
                    "Refundable credits can produce a refund",
                    "Phase out as income rises",
                ],
            },
            expert: EntrySpec {
                title: "Credit Coordination",
                body: "The refundable vs non-refundable distinction is critical. \
                       Phase-out ranges create high effective marginal rates; CTC \
                       phase-out starts at $400K (MFJ), and EITC optimization requires \
                       careful income management.",
                key_points: &[
                    "Refundable vs non-refundable ordering matters",
                    "Phase-outs inflate effective marginal rates",
                    "CTC phase-out begins at $400K MFJ",
                ],
            },
            related: &["deductions_vs_credits", "agi", "tax_planning"],
        },
    );

    table.insert(
        "filing_status",
        TopicSpec {
            novice: EntrySpec {
                title: "Choosing Your Filing Status",
                body: "Your filing status (like Single, Married Filing Jointly, or Head \
                       of Household) affects your tax brackets and standard deduction. \
                       Choose the one that fits your situation - usually the one that \
                       gives you the lowest tax.",
                key_points: &[
                    "Determined by your situation on December 31st",
                    "Sets both brackets and standard deduction",
                    "Head of Household requires a qualifying dependent",
                ],
            },
            intermediate: EntrySpec {
                title: "Filing Status",
                body: "Filing status determines standard deduction amounts and bracket \
                       thresholds. Options include Single, Married Filing Jointly, \
                       Married Filing Separately, and Head of Household. Consider the \
                       marriage bonus/penalty when comparing.",
                key_points: &[
                    "Keys both the schedule and the deduction",
                    "Joint filing is usually best for married couples",
                    "Separate filing trades rates for liability isolation",
                ],
            },
            expert: EntrySpec {
                title: "Filing Status Optimization",
                body: "MFJ vs MFS analysis turns on the SALT cap, student loan \
                       interest, and IRA phase-outs. HOH requires maintaining a home \
                       for a qualifying person for more than half the year; marital \
                       status is determined at year-end.",
                key_points: &[
                    "MFJ brings joint and several liability",
                    "HOH: >50% household maintenance test",
                    "Status fixed by year-end marital status",
                ],
            },
            related: &["standard_deduction", "progressive_brackets", "tax_planning"],
        },
    );

    table.insert(
        "deductions_vs_credits",
        TopicSpec {
            novice: EntrySpec {
                title: "Deductions vs Credits",
                body: "Deductions lower your taxable income (how much income gets \
                       taxed), while credits lower your actual tax bill. A $1,000 \
                       credit saves you $1,000 in taxes, but a $1,000 deduction saves \
                       you less (based on your tax rate).",
                key_points: &[
                    "Deductions shrink taxable income",
                    "Credits shrink the tax bill itself",
                    "A credit beats a deduction of the same size",
                ],
            },
            intermediate: EntrySpec {
                title: "Deductions versus Credits",
                body: "Deductions reduce taxable income (value = deduction x marginal \
                       rate). Credits reduce tax owed dollar-for-dollar, so a $1,000 \
                       credit always beats a $1,000 deduction. Some credits are \
                       refundable and can create a refund.",
                key_points: &[
                    "Deduction value scales with the marginal rate",
                    "Credits are worth face value",
                    "Refundable credits can exceed liability",
                ],
            },
            expert: EntrySpec {
                title: "Deduction/Credit Hierarchy",
                body: "Optimization hierarchy: refundable credits > non-refundable \
                       credits > deductions. Timing strategies differ: accelerate \
                       deductions into high-marginal-rate years, and spread credit \
                       claims when a phase-out applies.",
                key_points: &[
                    "Refundable credits sit atop the hierarchy",
                    "Deductions belong in high-rate years",
                    "Phase-outs reward spreading credit claims",
                ],
            },
            related: &["credits", "itemized_deductions", "tax_planning"],
        },
    );

    table.insert(
        "tax_planning",
        TopicSpec {
            novice: EntrySpec {
                title: "Tax Planning Basics",
                body: "Tax planning means making smart choices throughout the year to \
                       reduce your taxes legally. This includes timing income and \
                       expenses, maximizing deductions and credits, and contributing \
                       to retirement accounts.",
                key_points: &[
                    "A year-round activity, not an April scramble",
                    "Timing of income and expenses matters",
                    "Retirement contributions cut today's taxable income",
                ],
            },
            intermediate: EntrySpec {
                title: "Year-Round Tax Planning",
                body: "Year-round strategies: maximize retirement contributions (401k, \
                       IRA), HSA funding, timing of income and deductions, capital \
                       gain/loss harvesting, charitable giving strategies, and \
                       education savings (529 plans).",
                key_points: &[
                    "Max out tax-advantaged accounts first",
                    "Harvest losses against realized gains",
                    "Bunch charitable gifts around the deduction election",
                ],
            },
            expert: EntrySpec {
                title: "Multi-Year Planning Framework",
                body: "Project income streams across years and manage bracket \
                       positioning: fill low brackets deliberately, accelerate or \
                       defer recognition around threshold years, and coordinate \
                       deduction bunching with the standard/itemized election.",
                key_points: &[
                    "Bracket management across a multi-year horizon",
                    "Deliberately fill low brackets in lean years",
                    "Coordinate bunching with the deduction election",
                ],
            },
            related: &["deductions_vs_credits", "credits", "marginal_rate"],
        },
    );

    table
});

/// Related topics attached to fallback explanations for unknown topics.
pub const DEFAULT_RELATED: &[&str] = &["tax_planning", "filing_status"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_topic_has_three_distinct_tiers() {
        for (topic, spec) in TOPIC_TABLE.iter() {
            assert!(!spec.novice.body.is_empty(), "{topic}: empty novice body");
            assert_ne!(spec.novice.body, spec.intermediate.body, "{topic}");
            assert_ne!(spec.intermediate.body, spec.expert.body, "{topic}");
            for level in [
                ProficiencyLevel::Novice,
                ProficiencyLevel::Intermediate,
                ProficiencyLevel::Expert,
            ] {
                let entry = spec.for_level(level);
                assert!(!entry.title.is_empty());
                assert!(!entry.key_points.is_empty());
            }
        }
    }

    #[test]
    fn test_related_topics_bounded_and_resolvable() {
        for (topic, spec) in TOPIC_TABLE.iter() {
            assert!(
                spec.related.len() <= MAX_RELATED_TOPICS,
                "{topic}: too many related topics"
            );
            for related in spec.related {
                assert!(
                    TOPIC_TABLE.contains_key(related),
                    "{topic}: dangling related topic {related}"
                );
                assert_ne!(*related, *topic, "{topic}: self-reference");
            }
        }
    }

    #[test]
    fn test_agi_expert_adjacency() {
        let spec = &TOPIC_TABLE["agi"];
        assert_eq!(
            spec.related.to_vec(),
            vec!["standard_deduction", "itemized_deductions", "credits"]
        );
    }

    #[test]
    fn test_default_related_resolvable() {
        for related in DEFAULT_RELATED {
            assert!(TOPIC_TABLE.contains_key(related));
        }
    }
}
