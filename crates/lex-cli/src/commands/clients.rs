use lex_core::enums::SortDirection;
use lex_query::query::{ClientQuery, ClientSortKey, clamp_page};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ClientsArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output_page;

/// Handle `lexdesk clients`.
pub fn handle(args: &ClientsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = build_query(args, ctx)?;
    let page = query.run(&ctx.snapshot.clients);
    output_page(&page, flags.format)
}

fn build_query(args: &ClientsArgs, ctx: &AppContext) -> anyhow::Result<ClientQuery> {
    let mut query = ClientQuery::new(ctx.config.query.client_page_size()?);

    query.set_tags(&args.tag);
    if let Some(term) = &args.search {
        query.set_search(term.as_str());
    }

    let key = match &args.sort {
        Some(raw) => Some(parse_enum::<ClientSortKey>(raw, "sort")?),
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

    let total_pages = query.run(&ctx.snapshot.clients).total_pages;
    query.set_page(clamp_page(args.page.unwrap_or(1), total_pages));
    Ok(query)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use lex_config::LexConfig;
    use lex_core::entities::ClientRecord;
    use lex_core::snapshot::Snapshot;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::root_commands::DirectionArg;

    fn client(id: &str, tags: &[&str]) -> ClientRecord {
        ClientRecord {
            id: id.to_string(),
            name: format!("Client {id}"),
            email: format!("{id}@example.com"),
            phone: None,
            tags: tags.iter().map(ToString::to_string).collect(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn ctx() -> AppContext {
        AppContext {
            config: LexConfig::default(),
            snapshot: Snapshot {
                clients: vec![client("a", &["VIP", "rural"]), client("b", &["VIP"]), client("c", &[])],
                ..Snapshot::default()
            },
            today: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
        }
    }

    #[test]
    fn repeated_tags_all_apply() {
        let ctx = ctx();
        let args = ClientsArgs {
            search: None,
            tag: vec!["VIP".to_string(), "rural".to_string()],
            sort: None,
            direction: None,
            page: None,
        };
        let query = build_query(&args, &ctx).unwrap();
        let ids: Vec<&str> = query.run(&ctx.snapshot.clients).items.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a"]);
    }

    #[test]
    fn descending_name_sort() {
        let ctx = ctx();
        let args = ClientsArgs {
            search: None,
            tag: Vec::new(),
            sort: Some("name".to_string()),
            direction: Some(DirectionArg::Desc),
            page: Some(0),
        };
        let query = build_query(&args, &ctx).unwrap();
        assert_eq!(query.page(), 1);
        let ids: Vec<&str> = query.run(&ctx.snapshot.clients).items.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn search_term_is_passed_through_verbatim() {
        let ctx = ctx();
        let args = ClientsArgs {
            search: Some("client a ".to_string()),
            tag: Vec::new(),
            sort: None,
            direction: None,
            page: None,
        };
        let query = build_query(&args, &ctx).unwrap();
        assert_eq!(query.search(), "client a ");
        assert_eq!(query.run(&ctx.snapshot.clients).total_filtered_count, 0);
    }
}
