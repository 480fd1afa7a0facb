//! The rule table, in evaluation order

use crate::rule::{Cluster, Rule};
use claimcheck_domain::Verdict;

const MARRIAGE_WORDS: &[&str] = &["marr", "wife", "husband", "wedding"];

/// Every rule, in evaluation order; the first match wins
pub static RULES: &[Rule] = &[
    // Astronomy and space
    Rule {
        name: "sun-rises-east",
        cluster: Cluster::Astronomy,
        all_of: &[
            &["sun", "sunrise"],
            &["east"],
            &["rise", "raises", "raise", "rising", "comes"],
        ],
        verdict: Verdict::Real,
        confidence: 0.99,
        reason: "Scientifically verified: The sun rises in the east due to Earth's rotation on its axis (counterclockwise when viewed from north pole)",
        tags: &["astronomy", "science", "verified"],
    },
    Rule {
        name: "sun-rises-west",
        cluster: Cluster::Astronomy,
        all_of: &[
            &["sun", "sunrise"],
            &["west"],
            &["rise", "raises", "raise", "rising"],
        ],
        verdict: Verdict::Fake,
        confidence: 0.99,
        reason: "INCORRECT: The sun rises in the EAST, not west. The sun SETS in the west. Basic astronomy fact proven by Earth's rotation.",
        tags: &["astronomy", "science", "false", "common-error"],
    },
    Rule {
        name: "sun-sets-west",
        cluster: Cluster::Astronomy,
        all_of: &[&["sun", "sunset"], &["west"], &["set", "sets", "setting"]],
        verdict: Verdict::Real,
        confidence: 0.99,
        reason: "Scientifically verified: The sun sets in the west as Earth rotates eastward",
        tags: &["astronomy", "science", "verified"],
    },
    Rule {
        name: "moon-landing-hoax",
        cluster: Cluster::Astronomy,
        all_of: &[
            &["moon", "lunar"],
            &["landing"],
            &["fake", "hoax", "never", "conspiracy"],
        ],
        verdict: Verdict::Fake,
        confidence: 0.99,
        reason: "FALSE: Moon landings are REAL and well-documented (Apollo 11 in 1969, Apollo 12-17). Physical evidence, thousands of witnesses, independent verification from other countries.",
        tags: &["history", "space", "conspiracy", "debunked", "apollo"],
    },
    Rule {
        name: "chandrayaan-landing",
        cluster: Cluster::Astronomy,
        all_of: &[
            &["chandrayaan", "chandrayaan-3"],
            &["moon", "lunar"],
            &["landing", "landed", "south pole"],
        ],
        verdict: Verdict::Real,
        confidence: 0.99,
        reason: "Verified: Chandrayaan-3 successfully landed on the moon's SOUTH POLE on August 23, 2023 (ISRO official confirmation)",
        tags: &["space", "ISRO", "moon", "verified", "india"],
    },
    // Geography and geology
    Rule {
        name: "flat-earth",
        cluster: Cluster::Geography,
        all_of: &[&["earth", "world", "planet"], &["flat"]],
        verdict: Verdict::Fake,
        confidence: 0.99,
        reason: "FALSE CONSPIRACY: Earth is spherical (oblate spheroid), proven by physics, satellite imagery, NASA observations, circumnavigation, gravity, and basic geometry. No credible evidence supports flat Earth.",
        tags: &["geography", "science", "conspiracy", "debunked", "false-belief"],
    },
    Rule {
        name: "round-earth",
        cluster: Cluster::Geography,
        all_of: &[
            &["earth", "world", "planet"],
            &["spherical", "sphere", "round", "globe", "ball"],
        ],
        verdict: Verdict::Real,
        confidence: 0.99,
        reason: "Verified: Earth is a sphere (oblate spheroid), confirmed by physics, satellite imagery, space exploration, and gravity principles",
        tags: &["geography", "science", "verified", "earth-shape"],
    },
    Rule {
        name: "frozen-core",
        cluster: Cluster::Geography,
        all_of: &[&["earth", "planet"], &["core"], &["ice", "frozen", "cold"]],
        verdict: Verdict::Fake,
        confidence: 0.99,
        reason: "FALSE: Earth's core is NOT ice. It consists of solid iron inner core and liquid iron outer core at extreme temperatures (5000-7000K), far hotter than the sun's surface.",
        tags: &["geology", "science", "false", "misinformation"],
    },
    Rule {
        name: "iron-core",
        cluster: Cluster::Geography,
        all_of: &[
            &["earth", "planet"],
            &["core"],
            &["iron", "metal", "hot", "temperature"],
        ],
        verdict: Verdict::Real,
        confidence: 0.99,
        reason: "Verified: Earth's core is primarily iron with solid inner core (5200K) and liquid outer core (3800-5500K), confirmed by seismic studies and geophysics",
        tags: &["geology", "science", "verified", "earth-structure"],
    },
    // Health and biology
    Rule {
        name: "vaccines-save-lives",
        cluster: Cluster::Health,
        all_of: &[
            &["vaccine", "vaccination"],
            &["save", "lives", "effective", "protect", "prevent"],
        ],
        verdict: Verdict::Real,
        confidence: 0.99,
        reason: "Verified: Vaccines SAVE LIVES and are scientifically proven effective. WHO reports vaccines prevent 2-3 million deaths annually. Supported by global medical consensus (CDC, WHO, NHS, etc.)",
        tags: &["health", "medicine", "public health", "verified"],
    },
    Rule {
        name: "vaccine-microchips",
        cluster: Cluster::Health,
        all_of: &[
            &["vaccine", "vaccination"],
            &["microchip", "chip", "tracking", "gps", "implant"],
        ],
        verdict: Verdict::Fake,
        confidence: 0.99,
        reason: "FALSE CONSPIRACY: Vaccines do NOT contain microchips, GPS trackers, or any tracking devices. This is completely false with zero scientific evidence. Vaccines contain: mRNA, proteins, lipids, and stabilizers only.",
        tags: &["health", "conspiracy", "debunked", "false-claim"],
    },
    Rule {
        name: "vaccines-harmful",
        cluster: Cluster::Health,
        all_of: &[
            &["vaccine", "vaccination"],
            &["harmful", "poison", "toxic", "dangerous", "kill"],
        ],
        verdict: Verdict::Fake,
        confidence: 0.98,
        reason: "FALSE: Vaccines are safe and extensively tested for safety. Side effects are rare and mild (soreness, fatigue). Serious reactions occur in 1-2 per million. Benefits vastly outweigh risks.",
        tags: &["health", "misinformation", "debunked", "safety"],
    },
    Rule {
        name: "human-gills",
        cluster: Cluster::Health,
        all_of: &[
            &["human", "people", "person"],
            &["gill", "gills", "develop gills", "grow gills"],
        ],
        verdict: Verdict::Fake,
        confidence: 0.99,
        reason: "FALSE: Humans CANNOT and will NOT develop gills. We are mammals with lungs, not fish. Gills are biological structures for extracting oxygen from water - impossible for humans to develop through evolution or any modification.",
        tags: &["biology", "science", "evolution", "false"],
    },
    // Water constants
    Rule {
        name: "water-boils",
        cluster: Cluster::Chemistry,
        all_of: &[
            &["water"],
            &["boil"],
            &["100", "celsius", "212", "fahrenheit"],
        ],
        verdict: Verdict::Real,
        confidence: 0.99,
        reason: "Verified: Water boils at exactly 100°C (212°F) at sea level pressure (101.325 kPa). This is a fundamental physics constant.",
        tags: &["science", "chemistry", "physics", "verified", "constants"],
    },
    Rule {
        name: "water-freezes",
        cluster: Cluster::Chemistry,
        all_of: &[
            &["water"],
            &["freeze"],
            &["0", "celsius", "32", "fahrenheit"],
        ],
        verdict: Verdict::Real,
        confidence: 0.99,
        reason: "Verified: Water freezes at 0°C (32°F) at sea level pressure. This is a fundamental physics and chemistry principle used in all scientific measurements.",
        tags: &["science", "chemistry", "physics", "verified", "constants"],
    },
    // Marriages
    Rule {
        name: "kohli-sharma-marriage",
        cluster: Cluster::Marriages,
        all_of: &[&["virat", "kohli"], &["anushka"], MARRIAGE_WORDS],
        verdict: Verdict::Real,
        confidence: 0.99,
        reason: "Verified: Virat Kohli (Indian Cricketer) married Anushka Sharma (Bollywood actress) on December 11, 2017 in Tuscany, Italy, in a private ceremony.",
        tags: &["celebrity", "cricket", "bollywood", "marriage", "verified", "india"],
    },
    Rule {
        name: "dhoni-rawat-marriage",
        cluster: Cluster::Marriages,
        all_of: &[&["dhoni", "ms dhoni", "mahendra"], &["sakshi"], MARRIAGE_WORDS],
        verdict: Verdict::Real,
        confidence: 0.99,
        reason: "Verified: MS Dhoni (Mahendra Singh Dhoni, Indian Cricket captain) married Sakshi Singh Rawat on July 6, 2010 in a traditional ceremony. They have been together since.",
        tags: &["celebrity", "cricket", "marriage", "verified", "india"],
    },
    // Climate
    Rule {
        name: "climate-change-real",
        cluster: Cluster::Climate,
        all_of: &[
            &["climate", "global"],
            &["change"],
            &["real", "happening", "proven", "true"],
        ],
        verdict: Verdict::Real,
        confidence: 0.99,
        reason: "Verified: Climate change is REAL and scientifically proven. Global temperatures have increased ~1.1°C since pre-industrial times due to human greenhouse gas emissions. Confirmed by NASA, IPCC, and international consensus.",
        tags: &["environment", "science", "climate", "verified", "global-warming"],
    },
    Rule {
        name: "climate-change-hoax",
        cluster: Cluster::Climate,
        all_of: &[
            &["climate", "global"],
            &["change"],
            &["fake", "hoax", "conspiracy", "false"],
        ],
        verdict: Verdict::Fake,
        confidence: 0.99,
        reason: "FALSE: Climate change is real and scientifically documented by NASA, NOAA, IPCC, and 97% of climate scientists worldwide. Extensive evidence from temperature records, sea level rise, ice loss, and atmospheric CO2 increases.",
        tags: &["environment", "misinformation", "debunked", "science-denial"],
    },
    Rule {
        name: "global-warming-real",
        cluster: Cluster::Climate,
        all_of: &[
            &["global", "earth"],
            &["warm"],
            &["real", "happening", "temperature", "rise"],
        ],
        verdict: Verdict::Real,
        confidence: 0.98,
        reason: "Verified: Global warming is REAL. Average global temperatures have risen consistently for 150+ years. Primary cause: greenhouse gas emissions from human activities (burning fossil fuels, deforestation).",
        tags: &["environment", "science", "climate", "verified"],
    },
    // Technology
    Rule {
        name: "ai-advancing",
        cluster: Cluster::Technology,
        all_of: &[
            &["artificial", "ai"],
            &["advancing", "developing", "improving", "progress", "evolving"],
        ],
        verdict: Verdict::Real,
        confidence: 0.95,
        reason: "Verified: Artificial Intelligence is rapidly advancing in natural language processing, computer vision, robotics, and countless fields. Active development by major tech companies, research institutions, and startups worldwide.",
        tags: &["technology", "AI", "innovation", "verified"],
    },
    Rule {
        name: "web3-evolving",
        cluster: Cluster::Technology,
        all_of: &[
            &["web3", "blockchain", "crypto"],
            &["developing", "evolving", "growing"],
        ],
        verdict: Verdict::Real,
        confidence: 0.96,
        reason: "Verified: Web3, Blockchain, and Cryptocurrency technologies are actively evolving and being developed. Thousands of projects, continuous innovation, and increasing institutional adoption occurring worldwide.",
        tags: &["technology", "blockchain", "crypto", "web3", "verified"],
    },
];
