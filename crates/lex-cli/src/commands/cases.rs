use lex_core::enums::{CaseType, SortDirection};
use lex_query::query::{CaseQuery, CaseSortKey, clamp_page};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CasesArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output_page;

/// Handle `lexdesk cases`.
pub fn handle(args: &CasesArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = build_query(args, ctx)?;
    let page = query.run(&ctx.snapshot.cases);
    output_page(&page, flags.format)
}

fn build_query(args: &CasesArgs, ctx: &AppContext) -> anyhow::Result<CaseQuery> {
    let mut query = CaseQuery::new(ctx.config.query.case_page_size()?);

    if let Some(raw) = &args.case_type {
        query.set_type_filter(Some(parse_enum::<CaseType>(raw, "type")?));
    }
    if let Some(term) = &args.search {
        query.set_search(term.as_str());
    }

    let key = match &args.sort {
        Some(raw) => Some(parse_enum::<CaseSortKey>(raw, "sort")?),
        None => None,
    };
    match (key, args.direction) {
        (Some(key), direction) => {
            query.set_sort(key, direction.map_or(SortDirection::Ascending, SortDirection::from));
        }
        (None, Some(direction)) => {
            query.set_sort(query.sort().key, direction.into());
        }
        (None, None) => {}
    }

    let total_pages = query.run(&ctx.snapshot.cases).total_pages;
    query.set_page(clamp_page(args.page.unwrap_or(1), total_pages));
    Ok(query)
}
