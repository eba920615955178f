//! Usage text

use std::io::Write;
use tsheep_core::settings::{KNOWN_SKILLS, PACKAGE_NAME};
use tsheep_core::Logger;

pub fn print_usage<W: Write>(logger: &mut Logger<W>) {
    let example = KNOWN_SKILLS.first().copied().unwrap_or("<skill-name>");

    logger.info("Usage:");
    logger.plain(format!(
        "  npx {PACKAGE_NAME} add <skill-name> [options]    Install a skill"
    ));
    logger.plain(format!(
        "  npx {PACKAGE_NAME} list                          List available skills"
    ));
    logger.plain(format!(
        "  npx {PACKAGE_NAME} help                          Show this help message"
    ));

    logger.info("\nOptions:");
    logger.plain("  -l, --local     Install into ./.claude/skills (current project)");
    logger.plain("  -g, --global    Install into ~/.claude/skills (default)");
    logger.plain("  -c, --codex     Use .codex instead of .claude");

    logger.info("\nExamples:");
    logger.hint(format!("  npx {PACKAGE_NAME} add {example}"));
    logger.hint(format!("  npx {PACKAGE_NAME} add {example} --local"));
    logger.hint(format!("  npx {PACKAGE_NAME} add {example} --codex"));
}
