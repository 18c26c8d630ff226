use dioxus::prelude::*;
use forum_core::ForumView;

/// Heading, average summary and rate table for one [`ForumView`].
#[component]
pub fn ForumPage(view: ForumView) -> Element {
    rsx! {
        h1 { "{view.heading}" }
        p { "{view.summary}" }
        table {
            tr {
                for label in view.table.header {
                    th { "{label}" }
                }
            }
            for (index, row) in view.table.rows.iter().enumerate() {
                tr { key: "{index}",
                    td { "{row.name}" }
                    td { "{row.occupation}" }
                    td { "{row.rate}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forum_core::Freelancer;

    fn render(view: ForumView) -> String {
        let mut dom = VirtualDom::new_with_props(ForumPage, ForumPageProps { view });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn two_rows() -> ForumView {
        ForumView::build(
            &[
                Freelancer::new("Alice", "Writer", 30),
                Freelancer::new("Bob", "Teacher", 50),
            ],
            Some(40.0),
        )
    }

    #[test]
    fn test_header_row_and_one_row_per_record() {
        let html = render(two_rows());

        assert!(html.contains("<h1>Freelancer Forum</h1>"));
        assert!(html.contains("<p>The average starting price is $40.00.</p>"));
        assert!(html.contains("<tr><th>NAME</th><th>OCCUPATION</th><th>RATE</th></tr>"));
        assert!(html.contains("<tr><td>Alice</td><td>Writer</td><td>$30</td></tr>"));
        assert!(html.contains("<tr><td>Bob</td><td>Teacher</td><td>$50</td></tr>"));
        assert_eq!(html.matches("<tr>").count(), 3);
        assert_eq!(html.matches("<table>").count(), 1);
    }

    #[test]
    fn test_empty_view_has_no_data_rows() {
        let html = render(ForumView::build(&[], None));

        assert!(html.contains(forum_core::view::NO_AVERAGE_SUMMARY));
        assert!(html.contains("<tr><th>NAME</th><th>OCCUPATION</th><th>RATE</th></tr>"));
        assert_eq!(html.matches("<tr>").count(), 1);
        assert_eq!(html.matches("<td>").count(), 0);
    }

    #[test]
    fn test_rerender_replaces_previous_output() {
        let mut dom = VirtualDom::new_with_props(ForumPage, ForumPageProps { view: two_rows() });
        dom.rebuild_in_place();
        let first = dioxus_ssr::render(&dom);

        dom.mark_dirty(ScopeId::ROOT);
        dom.render_immediate_to_vec();
        let second = dioxus_ssr::render(&dom);

        assert_eq!(first, second);
        assert_eq!(second.matches("<h1>").count(), 1);
        assert_eq!(first, render(two_rows()));
    }
}
