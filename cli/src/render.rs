use owo_colors::OwoColorize;
use showcase_discovery::BrowseView;
use showcase_discovery::Contributor;
use showcase_discovery::DashboardSummary;
use showcase_discovery::FacetCount;
use showcase_discovery::ProjectRecord;
use showcase_discovery::ViewMode;

const UNTITLED: &str = "(untitled)";
const LABEL_WIDTH: usize = 20;

/// Plain-text rendering; `color` only adds emphasis, never changes content.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn for_stdout() -> Self {
        Self::new(supports_color::on_cached(supports_color::Stream::Stdout).is_some())
    }

    fn heading(self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn browse(self, view: &BrowseView<'_>) -> String {
        let mut lines = vec![self.heading(&view.headline()), self.dim(view.subtitle())];
        if view.is_filtered() {
            let labels: Vec<&str> = view
                .active_filters
                .iter()
                .map(|token| token.label.as_str())
                .collect();
            lines.push(format!("Active filters: {}", labels.join(" | ")));
        }
        if view.projects.is_empty() {
            lines.push("No projects found".to_string());
            return join_lines(lines);
        }
        lines.push(String::new());
        for project in &view.projects {
            match view.view_mode {
                ViewMode::Grid => lines.push(grid_line(project)),
                ViewMode::List => self.list_entry(&mut lines, project),
            }
        }
        join_lines(lines)
    }

    fn list_entry(self, lines: &mut Vec<String>, project: &ProjectRecord) {
        lines.push(self.heading(title_of(project)));
        lines.push(format!(
            "  {} | {} | {} | id {}",
            project.status().unwrap_or("-"),
            project.department().unwrap_or("-"),
            project.academic_year().unwrap_or("-"),
            project.id(),
        ));
        if !project.description().is_empty() {
            lines.push(format!("  {}", project.description()));
        }
        if !project.contributors.is_empty() {
            let names: Vec<&str> = project
                .contributors
                .iter()
                .map(Contributor::display_name)
                .collect();
            lines.push(format!("  Contributors: {}", names.join(", ")));
        }
        if !project.technologies_used.is_empty() {
            lines.push(format!("  Tech: {}", project.technologies_used.join(", ")));
        }
    }

    pub fn dashboard(self, summary: &DashboardSummary, top: usize) -> String {
        let mut lines = vec![
            format!(
                "{} projects across {} categories",
                summary.total, summary.category_vocabulary_size
            ),
            String::new(),
            self.heading("Status"),
        ];
        lines.extend(summary.statuses.iter().map(facet_line));
        if summary.unclassified_status > 0 {
            lines.push(format!(
                "  {:<LABEL_WIDTH$} {}",
                "Unclassified", summary.unclassified_status
            ));
        }
        lines.push(String::new());
        lines.push(self.heading("Top categories"));
        let top_categories = summary.top_categories(top);
        if top_categories.is_empty() {
            lines.push("  none".to_string());
        }
        lines.extend(top_categories.iter().map(facet_line));
        join_lines(lines)
    }

    pub fn project(self, project: &ProjectRecord) -> String {
        let mut lines = vec![self.heading(title_of(project))];
        let fields = [
            ("ID", project.id().to_string()),
            ("Status", project.status().unwrap_or_default().to_string()),
            ("Category", project.department().unwrap_or_default().to_string()),
            ("Year", project.academic_year().unwrap_or_default().to_string()),
            ("Created", project.created_at.clone().unwrap_or_default()),
            ("Source", project.source_code_url.clone().unwrap_or_default()),
            ("Tech", project.technologies_used.join(", ")),
            ("Tags", project.tags.join(", ")),
        ];
        lines.extend(
            fields
                .iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(label, value)| format!("{label:<14}{value}")),
        );
        for (heading, text) in [
            ("Abstract", project.abstract_text()),
            ("Description", project.description()),
        ] {
            if !text.is_empty() {
                lines.extend([String::new(), heading.to_string(), format!("  {text}")]);
            }
        }
        if !project.contributors.is_empty() {
            lines.extend([String::new(), "Contributors".to_string()]);
            lines.extend(project.contributors.iter().map(|contributor| {
                match contributor.role() {
                    Some(role) if !role.is_empty() => {
                        format!("  {} ({role})", contributor.display_name())
                    }
                    _ => format!("  {}", contributor.display_name()),
                }
            }));
        }
        join_lines(lines)
    }

    pub fn project_list(self, projects: &[ProjectRecord]) -> String {
        if projects.is_empty() {
            return join_lines(vec!["No projects found.".to_string()]);
        }
        join_lines(projects.iter().map(grid_line).collect())
    }
}

fn grid_line(project: &ProjectRecord) -> String {
    format!(
        "{}  [{}] {} {}",
        title_of(project),
        project.status().unwrap_or("-"),
        project.department().unwrap_or("-"),
        project.academic_year().unwrap_or("-"),
    )
}

fn title_of(project: &ProjectRecord) -> &str {
    match project.title() {
        "" => UNTITLED,
        title => title,
    }
}

fn facet_line(facet: &FacetCount) -> String {
    format!("  {:<LABEL_WIDTH$} {}", facet.key, facet.count)
}

/// Newline-terminated output, one entry per line.
fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
