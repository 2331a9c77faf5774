//! Fixed vocabulary of the tracker (habits, life domains) and the Daily
//! Journal column layout. Formula column letters are derived from this table.

use crate::tracker::theme::PaletteColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Habit {
    Clarity,
    Energy,
    Necessity,
    Productivity,
    Influence,
    Courage,
}

impl Habit {
    pub const ALL: [Habit; 6] = [
        Habit::Clarity,
        Habit::Energy,
        Habit::Necessity,
        Habit::Productivity,
        Habit::Influence,
        Habit::Courage,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Habit::Clarity => "Clarity",
            Habit::Energy => "Energy",
            Habit::Necessity => "Necessity",
            Habit::Productivity => "Productivity",
            Habit::Influence => "Influence",
            Habit::Courage => "Courage",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Money,
    Health,
    Career,
    Creative,
    Love,
    InnerPeace,
}

impl Domain {
    pub const ALL: [Domain; 6] = [
        Domain::Money,
        Domain::Health,
        Domain::Career,
        Domain::Creative,
        Domain::Love,
        Domain::InnerPeace,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Domain::Money => "Money & Finance",
            Domain::Health => "Health & Fitness",
            Domain::Career => "Career/BCCS",
            Domain::Creative => "Creative Ventures",
            Domain::Love => "Love & Relationship",
            Domain::InnerPeace => "Inner Peace",
        }
    }

    pub const fn color(self) -> PaletteColor {
        match self {
            Domain::Money => PaletteColor::DomainMoney,
            Domain::Health => PaletteColor::DomainHealth,
            Domain::Career => PaletteColor::DomainCareer,
            Domain::Creative => PaletteColor::DomainCreative,
            Domain::Love => PaletteColor::DomainLove,
            Domain::InnerPeace => PaletteColor::DomainInner,
        }
    }
}

pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// What a Daily Journal column holds. Roles carrying a number are 1-based
/// slots ("Goal 2" is `Goal(2)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnRole {
    Date,
    Day,
    Week,
    Quarter,
    Message,
    Goal(u8),
    Task(u8),
    TaskDone(u8),
    ReachOut(u8),
    Prompt(u8),
    Habit(Habit),
    OverallScore,
    DomainProgress(Domain),
    DomainNotes(Domain),
    PathA,
    Win(u8),
    Improvement,
    Gratitude,
    TomorrowPriority,
    Timestamp,
}

impl ColumnRole {
    /// Distinct key per role, usable in const context.
    const fn key(self) -> u16 {
        match self {
            ColumnRole::Date => 0,
            ColumnRole::Day => 1,
            ColumnRole::Week => 2,
            ColumnRole::Quarter => 3,
            ColumnRole::Message => 4,
            ColumnRole::Goal(n) => 100 + n as u16,
            ColumnRole::Task(n) => 200 + n as u16,
            ColumnRole::TaskDone(n) => 300 + n as u16,
            ColumnRole::ReachOut(n) => 400 + n as u16,
            ColumnRole::Prompt(n) => 500 + n as u16,
            ColumnRole::Habit(h) => 600 + h as u16,
            ColumnRole::OverallScore => 700,
            ColumnRole::DomainProgress(d) => 800 + d as u16,
            ColumnRole::DomainNotes(d) => 900 + d as u16,
            ColumnRole::PathA => 1000,
            ColumnRole::Win(n) => 1100 + n as u16,
            ColumnRole::Improvement => 1200,
            ColumnRole::Gratitude => 1201,
            ColumnRole::TomorrowPriority => 1202,
            ColumnRole::Timestamp => 1203,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JournalColumn {
    pub header: &'static str,
    pub width: f64,
    pub role: ColumnRole,
}

const fn col(header: &'static str, width: f64, role: ColumnRole) -> JournalColumn {
    JournalColumn {
        header,
        width,
        role,
    }
}

pub const JOURNAL_COLUMN_COUNT: usize = 55;

/// One wide record per day, in sheet order (A..BC).
pub const JOURNAL_COLUMNS: [JournalColumn; JOURNAL_COLUMN_COUNT] = [
    col("Date", 12.0, ColumnRole::Date),
    col("Day", 10.0, ColumnRole::Day),
    col("Week", 8.0, ColumnRole::Week),
    col("Quarter", 8.0, ColumnRole::Quarter),
    col("Today's Message", 40.0, ColumnRole::Message),
    col("Goal 1", 25.0, ColumnRole::Goal(1)),
    col("Goal 2", 25.0, ColumnRole::Goal(2)),
    col("Goal 3", 25.0, ColumnRole::Goal(3)),
    col("Task 1", 20.0, ColumnRole::Task(1)),
    col("Task 1 Done", 10.0, ColumnRole::TaskDone(1)),
    col("Task 2", 20.0, ColumnRole::Task(2)),
    col("Task 2 Done", 10.0, ColumnRole::TaskDone(2)),
    col("Task 3", 20.0, ColumnRole::Task(3)),
    col("Task 3 Done", 10.0, ColumnRole::TaskDone(3)),
    col("Reach Out 1", 15.0, ColumnRole::ReachOut(1)),
    col("Reach Out 2", 15.0, ColumnRole::ReachOut(2)),
    col("Reach Out 3", 15.0, ColumnRole::ReachOut(3)),
    col("Prompt 1", 30.0, ColumnRole::Prompt(1)),
    col("Prompt 2", 30.0, ColumnRole::Prompt(2)),
    col("Prompt 3", 30.0, ColumnRole::Prompt(3)),
    col("Prompt 4", 30.0, ColumnRole::Prompt(4)),
    col("Prompt 5", 30.0, ColumnRole::Prompt(5)),
    col("Prompt 6", 30.0, ColumnRole::Prompt(6)),
    col("Prompt 7", 30.0, ColumnRole::Prompt(7)),
    col("Prompt 8", 30.0, ColumnRole::Prompt(8)),
    col("Prompt 9", 30.0, ColumnRole::Prompt(9)),
    col("Prompt 10", 30.0, ColumnRole::Prompt(10)),
    col("Prompt 11", 30.0, ColumnRole::Prompt(11)),
    col("Clarity", 10.0, ColumnRole::Habit(Habit::Clarity)),
    col("Energy", 10.0, ColumnRole::Habit(Habit::Energy)),
    col("Necessity", 10.0, ColumnRole::Habit(Habit::Necessity)),
    col("Productivity", 10.0, ColumnRole::Habit(Habit::Productivity)),
    col("Influence", 10.0, ColumnRole::Habit(Habit::Influence)),
    col("Courage", 10.0, ColumnRole::Habit(Habit::Courage)),
    col("Overall Score", 12.0, ColumnRole::OverallScore),
    col("Money Progress", 12.0, ColumnRole::DomainProgress(Domain::Money)),
    col("Health Progress", 12.0, ColumnRole::DomainProgress(Domain::Health)),
    col("Career Progress", 12.0, ColumnRole::DomainProgress(Domain::Career)),
    col("Creative Progress", 12.0, ColumnRole::DomainProgress(Domain::Creative)),
    col("Love Progress", 12.0, ColumnRole::DomainProgress(Domain::Love)),
    col("Inner Progress", 12.0, ColumnRole::DomainProgress(Domain::InnerPeace)),
    col("Money Notes", 25.0, ColumnRole::DomainNotes(Domain::Money)),
    col("Health Notes", 25.0, ColumnRole::DomainNotes(Domain::Health)),
    col("Career Notes", 25.0, ColumnRole::DomainNotes(Domain::Career)),
    col("Creative Notes", 25.0, ColumnRole::DomainNotes(Domain::Creative)),
    col("Love Notes", 25.0, ColumnRole::DomainNotes(Domain::Love)),
    col("Inner Notes", 25.0, ColumnRole::DomainNotes(Domain::InnerPeace)),
    col("Path A %", 10.0, ColumnRole::PathA),
    col("Win 1", 30.0, ColumnRole::Win(1)),
    col("Win 2", 30.0, ColumnRole::Win(2)),
    col("Win 3", 30.0, ColumnRole::Win(3)),
    col("Improvement", 30.0, ColumnRole::Improvement),
    col("Gratitude", 30.0, ColumnRole::Gratitude),
    col("Tomorrow Priority", 30.0, ColumnRole::TomorrowPriority),
    col("Timestamp", 20.0, ColumnRole::Timestamp),
];

/// 1-based column of `role` in the Daily Journal. Used with a role missing
/// from [`JOURNAL_COLUMNS`] in a const item, this fails the build.
pub const fn journal_column(role: ColumnRole) -> u32 {
    let key = role.key();
    let mut i = 0;
    while i < JOURNAL_COLUMNS.len() {
        if JOURNAL_COLUMNS[i].role.key() == key {
            return i as u32 + 1;
        }
        i += 1;
    }
    panic!("role has no Daily Journal column")
}

pub const fn habit_column(habit: Habit) -> u32 {
    journal_column(ColumnRole::Habit(habit))
}

pub const DATE_COL: u32 = journal_column(ColumnRole::Date);
pub const DAY_COL: u32 = journal_column(ColumnRole::Day);
pub const WEEK_COL: u32 = journal_column(ColumnRole::Week);
pub const QUARTER_COL: u32 = journal_column(ColumnRole::Quarter);
pub const FIRST_GOAL_COL: u32 = journal_column(ColumnRole::Goal(1));
pub const LAST_GOAL_COL: u32 = journal_column(ColumnRole::Goal(3));
pub const TASK1_DONE_COL: u32 = journal_column(ColumnRole::TaskDone(1));
pub const CLARITY_COL: u32 = habit_column(Habit::Clarity);
pub const ENERGY_COL: u32 = habit_column(Habit::Energy);
pub const INFLUENCE_COL: u32 = habit_column(Habit::Influence);
pub const FIRST_HABIT_COL: u32 = habit_column(Habit::Clarity);
pub const LAST_HABIT_COL: u32 = habit_column(Habit::Courage);
pub const OVERALL_COL: u32 = journal_column(ColumnRole::OverallScore);
pub const PATH_A_COL: u32 = journal_column(ColumnRole::PathA);

/// First journal row holding a day record; row 1 is the header.
pub const FIRST_RECORD_ROW: u32 = 2;
