//! Search command implementation.

use crate::cli::args::SearchArgs;
use crate::cli::output::Output;
use crate::config::Config;
use crate::error::{ExitCode, Result};
use crate::search::{
    ObjectSet, OptionSet, SearchConfig, SearchEngine, SearchOption, SearchState, TargetSet,
};
use crate::tree::ResultTree;
use crate::workspace::Workspace;

/// Combine command-line flags with configured defaults.
pub fn build_config(args: &SearchArgs, config: &Config) -> SearchConfig {
    let defaults = &config.search;

    let object = if args.object.is_empty() {
        defaults.object
    } else {
        args.object.iter().copied().collect::<ObjectSet>()
    };

    let target = if args.target.is_empty() {
        defaults.target
    } else {
        args.target.iter().copied().collect::<TargetSet>()
    };

    let mut options: OptionSet = defaults.options();
    if args.case_sensitive {
        options.insert(SearchOption::CaseSensitive);
    }
    if args.whole_word {
        options.insert(SearchOption::WholeWordOnly);
    }
    if args.regex {
        options.insert(SearchOption::RegularExpression);
    }

    SearchConfig::new(args.keyword.clone())
        .with_scope(args.scope.unwrap_or(defaults.scope))
        .with_object(object)
        .with_target(target)
        .with_options(options)
}

pub fn run(args: &SearchArgs, config: &Config, output: &Output) -> Result<ExitCode> {
    let mut notebooks = config.notebooks.clone();
    notebooks.extend(args.notebook.iter().cloned());

    let workspace = Workspace::load(args.current.as_deref(), &args.opened, &notebooks)?;
    let search_config = build_config(args, config);

    let engine = SearchEngine::new();
    let result = engine.run(&search_config, &workspace);

    if args.tree {
        let mut tree = ResultTree::new();
        tree.on_count_changed(|count| tracing::debug!(count, "result count changed"));
        tree.update_results(&result.items);
        output.print_raw(&tree.to_string());
        output.info(&format!("{} Items", tree.top_level_count()));
    } else {
        output.print(&result)?;
    }

    let code = match result.state {
        SearchState::Fail => {
            output.warn(&format!("Search failed: {}", result.error_message));
            ExitCode::SearchFailed
        }
        SearchState::Cancelled => {
            output.info("Search cancelled");
            ExitCode::SearchCancelled
        }
        _ => {
            if result.has_error() {
                output.warn(&format!("Errors found during search: {}", result.error_message));
            }
            ExitCode::Success
        }
    };

    Ok(code)
}
