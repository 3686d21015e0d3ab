use chrono::{DateTime, Utc};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use qa_core::{
    Banner, DashboardStats, FieldErrors, MessageBoard, QueueQuery, QueueView, Thread,
    empty_tab_message,
};
use qa_model::{
    Badge, BadgeColor, Message, Question, QuestionStatus, relative_age, tag_badges,
};

pub fn print_queue(view: &QueueView<'_>, query: &QueueQuery, now: DateTime<Utc>) {
    println!("{}", tab_bar(view));
    println!(
        "Search: {} | Category: {} | Sort: {}",
        if query.search_term.is_empty() {
            "-"
        } else {
            query.search_term.as_str()
        },
        query.filter_by.label(),
        query.sort_by
    );
    if view.items.is_empty() {
        println!("{}", empty_tab_message(view.active_tab));
        return;
    }
    println!("{}", queue_table(&view.items, now));
}

/// One label per tab with its count; the active tab is bracketed.
pub fn tab_bar(view: &QueueView<'_>) -> String {
    QuestionStatus::TABS
        .iter()
        .map(|&tab| {
            let label = format!("{} ({})", Badge::for_status(tab).text, view.tab_counts.get(tab));
            if tab == view.active_tab {
                format!("[{label}]")
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn queue_table(questions: &[&Question], now: DateTime<Utc>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Question"),
        header_cell("Author"),
        header_cell("Category"),
        header_cell("Priority"),
        header_cell("Status"),
        header_cell("Tags"),
        header_cell("Responses"),
        header_cell("Asked"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 7, CellAlignment::Right);
    for question in questions {
        let tags = tag_badges(&question.tags).labels();
        table.add_row(vec![
            Cell::new(question.id),
            Cell::new(&question.title).add_attribute(Attribute::Bold),
            Cell::new(&question.author),
            Cell::new(&question.category),
            badge_cell(Badge::for_priority(question.priority)),
            badge_cell(Badge::for_status(question.status)),
            if tags.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(tags.join(" "))
            },
            Cell::new(question.responses),
            dim_cell(relative_age(question.created_at, now)),
        ]);
    }
    table
}

pub fn print_dashboard(stats: &DashboardStats, recent: &[&Question], now: DateTime<Utc>) {
    println!("{}", stats_table(stats));
    println!("Review progress: {}% answered", stats.answered_percent());
    if recent.is_empty() {
        println!("No questions yet.");
        return;
    }
    println!("Recent Questions");
    println!("{}", queue_table(recent, now));
}

pub fn stats_table(stats: &DashboardStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Total Questions"),
        header_cell("Pending Review"),
        header_cell("Answered"),
        header_cell("My Questions"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        count_cell(stats.total_questions, Color::Blue),
        count_cell(stats.pending_review, Color::Yellow),
        count_cell(stats.answered, Color::Green),
        count_cell(stats.my_questions, Color::Cyan),
    ]);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Center);
    }
    table
}

pub fn print_thread(thread: &Thread, now: DateTime<Utc>) {
    let question = &thread.question;
    println!("#{} {}", question.id, question.title);
    println!(
        "{} | {} | {} | asked by {} {} | reviewers: {}",
        Badge::for_status(question.status).text,
        Badge::for_priority(question.priority).text,
        question.category,
        question.author,
        relative_age(question.created_at, now),
        question.reviewer_group
    );
    let tags = tag_badges(&question.tags).labels();
    if !tags.is_empty() {
        println!("{}", tags.join(" "));
    }
    println!();
    println!("{}", question.body());
    println!();
    if let Some(banner) = thread.banner() {
        print_banner(banner);
    }
    if thread.responses.is_empty() {
        println!("No responses yet.");
        return;
    }
    println!("{}", responses_table(thread, now));
}

pub fn responses_table(thread: &Thread, now: DateTime<Utc>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Author"),
        header_cell("Role"),
        header_cell("Response"),
        header_cell("Helpful"),
        header_cell("Posted"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for response in &thread.responses {
        let author = if response.is_reviewer {
            Cell::new(format!("{} (reviewer)", response.author)).fg(Color::Green)
        } else {
            Cell::new(&response.author)
        };
        table.add_row(vec![
            Cell::new(response.id),
            author,
            dim_cell(&response.role),
            Cell::new(&response.content),
            Cell::new(response.helpful),
            dim_cell(relative_age(response.created_at, now)),
        ]);
    }
    table
}

pub fn print_messages(board: &MessageBoard) {
    if let Some(banner) = board.banner() {
        print_banner(banner);
    }
    let recent = board.recent();
    println!(
        "Recent Messages: showing {} of {}",
        recent.len(),
        board.messages().len()
    );
    if recent.is_empty() {
        println!("No messages yet. Send the first one!");
        return;
    }
    println!("{}", messages_table(recent));
}

pub fn messages_table(messages: &[Message]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Message"),
        header_cell("Sent"),
    ]);
    apply_table_style(&mut table);
    for message in messages {
        table.add_row(vec![
            Cell::new(&message.id),
            Cell::new(&message.content),
            dim_cell(message.display_time()),
        ]);
    }
    table
}

/// Success banners go to stdout, failures to stderr.
pub fn print_banner(banner: &Banner) {
    if banner.is_success() {
        println!("{banner}");
    } else {
        eprintln!("{banner}");
    }
}

pub fn print_field_errors(errors: &FieldErrors) {
    for field in errors.fields() {
        eprintln!("{}: {}", field.as_str(), field.feedback());
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn badge_cell(badge: Badge) -> Cell {
    let cell = Cell::new(badge.text);
    match badge.color {
        BadgeColor::Success => cell.fg(Color::Green),
        BadgeColor::Warning => cell.fg(Color::Yellow),
        BadgeColor::Danger => cell.fg(Color::Red),
        BadgeColor::Info => cell.fg(Color::Cyan),
        BadgeColor::Dark => cell.fg(Color::Magenta).add_attribute(Attribute::Bold),
        BadgeColor::Secondary => cell.fg(Color::DarkGrey),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    Cell::new(count).fg(color).add_attribute(Attribute::Bold)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
