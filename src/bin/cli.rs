use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use regionmap::{
    AppConfig, Catalog, MapSurface, RegionUpdate, SelectedRegion, Session, SurfaceEvent, TileSurface,
};
use tracing_subscriber::EnvFilter;

/// Фильтр журнала, если `RUST_LOG` не задан
const DEFAULT_LOG_FILTER: &str = "info";

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Распределение сотрудников по регионам
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Путь к файлу настроек в формате TOML
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Справочник регионов (.toml или .json); заменяет путь из настроек
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Файл с командами; без него команды читаются из stdin
    #[arg(short, long)]
    script: Option<PathBuf>,
}

/// Одна строка ввода
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_subcommand = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Список регионов по алфавиту
    List,
    /// Выбрать регион по коду
    Select { id: String },
    /// Снять выбор
    Clear,
    /// Назначить сотрудника выбранному региону
    Assign {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        /// Цвет региона; по умолчанию цвет из формы
        #[arg(long)]
        color: Option<String>,
    },
    /// Изменить сотрудника и/или цвет выбранного региона
    Update {
        #[arg(long)]
        employee: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Сбросить выбранный регион
    Reset,
    /// Показать выбранный регион и поля формы
    Show,
    /// Сводка покрытия
    Stats,
    /// Карта цветов id → цвет
    Colors,
    /// Навести указатель на регион
    Hover { id: String },
    /// Убрать указатель
    Unhover,
    /// Переместить указатель в точку поверхности
    Point { x: u32, y: u32 },
    /// Щёлкнуть по точке поверхности
    Click { x: u32, y: u32 },
    /// Сохранить поверхность карты в PNG
    Render { path: PathBuf },
    /// Вывести всё состояние в JSON
    Dump,
    /// Завершить работу
    Quit,
}

/// Разбивает строку на слова; двойные кавычки объединяют слова с пробелами.
fn split_line(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut pending = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                pending = true;
            }
            c if c.is_whitespace() && !quoted => {
                if pending {
                    words.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }
    if pending {
        words.push(current);
    }
    words
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Выполняет команду; `Ok(false)` — завершение работы.
fn execute(
    command: Command,
    session: &mut Session,
    surface: &mut TileSurface,
) -> Result<bool, Box<dyn std::error::Error>> {
    match command {
        Command::List => {
            for region in session.store().catalog().region_names() {
                println!("{:<8} {}", region.id, region.name);
            }
        }
        Command::Select { id } => {
            if let Err(e) = session.select(&id) {
                println!("Ошибка: {e}");
            }
        }
        Command::Clear => session.clear_selection(),
        Command::Assign { name, color } => {
            let color = color.unwrap_or_else(|| session.draft().color.clone());
            println!("{}", session.assign_selected(&name.join(" "), &color));
        }
        Command::Update { employee, color } => {
            let update = RegionUpdate { employee, color };
            println!("{}", session.update_selected(update));
        }
        Command::Reset => println!("{}", session.reset_selected()),
        Command::Show => match session.detail() {
            SelectedRegion::Nothing => println!("Регион не выбран"),
            SelectedRegion::Region(region) => {
                println!("{} ({})", region.name, region.id);
                println!("Часовой пояс: {}", region.timezone);
                match (&region.employee, &region.color) {
                    (Some(employee), Some(color)) => println!("Сотрудник: {employee} [{color}]"),
                    (Some(employee), None) => println!("Сотрудник: {employee}"),
                    (None, _) => println!("Сотрудник: не назначен"),
                }
                let draft = session.draft();
                println!("Форма: \"{}\" {}", draft.employee, draft.color);
            }
        },
        Command::Stats => {
            let stats = session.stats();
            println!(
                "Всего регионов: {}, назначено: {}, свободно: {}",
                stats.total, stats.assigned, stats.unassigned
            );
        }
        Command::Colors => print_json(&session.store().colors_by_id())?,
        Command::Hover { id } => {
            session.handle(SurfaceEvent::Hover(id))?;
            match session.tooltip() {
                Some(tip) => print_json(&tip)?,
                None => println!("Нет региона под указателем"),
            }
        }
        Command::Unhover => session.handle(SurfaceEvent::HoverEnd)?,
        Command::Point { x, y } => {
            if let Some(event) = surface.pointer_moved(x, y) {
                session.handle(event)?;
            }
            match session.tooltip() {
                Some(tip) => print_json(&tip)?,
                None => println!("Нет региона под указателем"),
            }
        }
        Command::Click { x, y } => match surface.click(x, y) {
            Some(event) => {
                if let Err(e) = session.handle(event) {
                    println!("Ошибка: {e}");
                }
            }
            None => println!("Нет региона в точке ({x}, {y})"),
        },
        Command::Render { path } => {
            surface.render(&session.frame());
            surface.save_as_png(&path.to_string_lossy())?;
            println!("Сохранено в {path:?}");
        }
        Command::Dump => print_json(&session.store().all())?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::from_toml_file(path)?,
        None => AppConfig::default(),
    };
    if cli.catalog.is_some() {
        config.catalog = cli.catalog.clone();
    }

    let catalog: Catalog = config.load_catalog()?;
    tracing::info!(regions = catalog.len(), "catalog loaded");

    let mut surface = TileSurface::new(&catalog, config.surface.clone())?;
    let mut session = Session::with_default_color(catalog, config.default_color.clone());

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };

    for line in input.lines() {
        let line = line?;
        let words = split_line(&line);
        if words.is_empty() || words[0].starts_with('#') {
            continue;
        }
        match Line::try_parse_from(words) {
            Ok(parsed) => {
                if !execute(parsed.command, &mut session, &mut surface)? {
                    break;
                }
            }
            Err(e) => println!("{e}"),
        }
    }

    Ok(())
}
