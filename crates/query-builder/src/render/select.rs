use crate::{
    ast::{
        common::{LimitStyle, NullsOrder},
        select::{FromClause, OrderByExpr, Select},
    },
    render::{Render, Renderer},
};
use model::pagination::sort::SortDirection;

impl Render for Select {
    fn render(&self, r: &mut Renderer) {
        // 1. SELECT clause; SQL Server's TOP sits between SELECT and the
        // column list.
        r.sql.push_str("SELECT ");
        if self.limit_style == LimitStyle::Top {
            if let Some(limit) = self.limit {
                r.sql.push_str(&format!("TOP {limit} "));
            }
        }
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            col.render(r);
        }

        // 2. FROM
        if let Some(from) = &self.from {
            r.sql.push(' ');
            from.render(r);
        }

        // 3. WHERE
        if let Some(where_clause) = &self.where_clause {
            r.sql.push_str(" WHERE ");
            where_clause.render(r);
        }

        // 4. ORDER BY
        if !self.order_by.is_empty() {
            r.sql.push_str(" ORDER BY ");
            for (i, order) in self.order_by.iter().enumerate() {
                if i > 0 {
                    r.sql.push_str(", ");
                }
                order.render(r);
            }
        }

        // 5. Row limit and offset
        match self.limit_style {
            LimitStyle::Limit => {
                if let Some(limit) = self.limit {
                    r.sql.push_str(&format!(" LIMIT {limit}"));
                }
                if let Some(offset) = self.offset {
                    r.sql.push_str(&format!(" OFFSET {offset}"));
                }
            }
            // TOP was emitted with the SELECT clause; keyset paging never
            // combines it with an offset.
            LimitStyle::Top => {}
            LimitStyle::Fetch => {
                let offset = self.offset.unwrap_or(0);
                r.sql.push_str(&format!(" OFFSET {offset} ROWS"));
                if let Some(limit) = self.limit {
                    r.sql.push_str(&format!(" FETCH NEXT {limit} ROWS ONLY"));
                }
            }
        }
    }
}

impl Render for FromClause {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("FROM ");
        if let Some(schema) = &self.table.schema {
            r.sql.push_str(&r.dialect.quote_identifier(schema));
            r.sql.push('.');
        }
        r.sql
            .push_str(&r.dialect.quote_identifier(&self.table.name));
        if let Some(alias) = &self.alias {
            r.sql.push_str(" AS ");
            r.sql.push_str(&r.dialect.quote_identifier(alias));
        }
    }
}

impl Render for OrderByExpr {
    fn render(&self, r: &mut Renderer) {
        self.expr.render(r);
        r.sql.push(' ');
        r.sql.push_str(match self.direction {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        });
        if let Some(nulls) = &self.nulls {
            r.sql.push_str(match nulls {
                NullsOrder::First => " NULLS FIRST",
                NullsOrder::Last => " NULLS LAST",
            });
        }
    }
}
