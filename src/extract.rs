use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::course::Class;
use crate::error::Result;
use crate::translate::{translate, Fields};

// Selectors
static SEL_HEADER: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr.datagrid-header th").expect("header selector is valid"));
static SEL_ROW: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("tr.datagrid-all, tr.datagrid-odd, tr.datagrid-even")
        .expect("row selector is valid")
});
static SEL_CELL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td.datagrid").expect("cell selector is valid"));

/// Text of a cell, one line per text fragment
///
/// `<br>` separated content such as multiple teachers or schedule lines stays
/// on separate lines.
fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// One raw field mapping per body row of the results grid, in document order
///
/// Keys are the header cells as written on the page, untranslated.
pub fn rows(html: &str) -> Vec<Fields> {
    let document = Html::parse_document(html);

    let fields = document
        .select(&SEL_HEADER)
        .map(|th| th.text().collect::<String>().trim().to_owned())
        .collect::<Vec<_>>();
    if fields.is_empty() {
        warn!("No header row found in the results page");
    }

    document
        .select(&SEL_ROW)
        .map(|row| {
            fields
                .iter()
                .zip(row.select(&SEL_CELL))
                .map(|(field, cell)| (field.clone(), cell_text(cell)))
                .collect::<Fields>()
        })
        .collect()
}

/// Turn a results page into classes
///
/// Headers are translated from `lang`; with `parse_info` each class also gets
/// its info blob decomposed.
///
/// # Errors
/// Fails on an unsupported language or a non-numeric numeric cell.
pub fn classes_from_html(html: &str, lang: &str, parse_info: bool) -> Result<Vec<Class>> {
    rows(html)
        .iter()
        .map(|row| -> Result<Class> {
            let mut class = Class::from_fields(&translate(row, lang)?)?;
            if parse_info {
                class.parse_info();
            }
            debug!(%class, schedules = class.schedules.len(), "Parsed row");
            Ok(class)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body><table>
            <tr class="datagrid-header"><th>课程名</th><th> 教师 </th><th>教室信息</th></tr>
            <tr class="datagrid-odd">
                <td class="datagrid">高等数学</td>
                <td class="datagrid">张三<br>李四</td>
                <td class="datagrid"><span>每周周一1~2节</span><br/>理教101</td>
            </tr>
            <tr class="datagrid-footer"><td class="datagrid">ignored</td></tr>
            <tr class="datagrid-even">
                <td class="datagrid">普通物理</td>
                <td class="datagrid">王五</td>
            </tr>
        </table></body></html>
    "#;

    #[test]
    fn rows_in_order() {
        let rows = rows(PAGE);

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0].keys().collect::<Vec<_>>(),
            ["课程名", "教师", "教室信息"]
        );
        assert_eq!(rows[0].get("教师"), Some("张三\n李四"));
        assert_eq!(rows[0].get("教室信息"), Some("每周周一1~2节\n理教101"));
        assert_eq!(rows[1].get("课程名"), Some("普通物理"));
        assert_eq!(rows[1].len(), 2);
    }

    #[test]
    fn no_grid() {
        assert!(rows("<html><body><p>请登录</p></body></html>").is_empty());
    }
}
