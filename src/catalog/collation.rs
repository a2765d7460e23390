//! Сравнение названий регионов с учётом русского алфавита
//!
//! Упрощённая трёхуровневая сортировка в духе UCA с русской настройкой:
//! 1. **Основной уровень** — буквы без учёта регистра; `ё` весит как `е`;
//!    пробелы и знаки препинания идут раньше цифр, цифры раньше букв,
//!    кириллица раньше латиницы.
//! 2. **Второй уровень** — `е` раньше `ё` при прочих равных.
//! 3. **Третий уровень** — строчная буква раньше заглавной.
//!
//! Побайтовое сравнение Unicode здесь не подходит: `Ё` (U+0401) оказалась бы
//! перед всем алфавитом, а заглавные — перед строчными.

use std::cmp::Ordering;

const RUSSIAN_ALPHABET: &str = "абвгдежзийклмнопрстуфхцчшщъыьэюя";

/// Группа символа на основном уровне, в порядке сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Group {
    Whitespace,
    Punctuation,
    Digit,
    Cyrillic,
    Latin,
    Other,
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn primary(c: char) -> (Group, u32) {
    let lower = fold(c);
    if lower.is_whitespace() {
        return (Group::Whitespace, 0);
    }
    if let Some(digit) = lower.to_digit(10) {
        return (Group::Digit, digit);
    }
    let base = if lower == 'ё' { 'е' } else { lower };
    if let Some(pos) = RUSSIAN_ALPHABET.chars().position(|a| a == base) {
        return (Group::Cyrillic, pos as u32);
    }
    if ('\u{0400}'..='\u{04FF}').contains(&base) {
        // Нерусские буквы кириллицы — после русского алфавита
        return (Group::Cyrillic, 0x100 + u32::from(base));
    }
    if base.is_ascii_alphabetic() {
        return (Group::Latin, u32::from(base));
    }
    if base.is_ascii_punctuation() || (!base.is_alphanumeric() && !base.is_control()) {
        return (Group::Punctuation, u32::from(base));
    }
    (Group::Other, u32::from(base))
}

fn secondary(c: char) -> u8 {
    u8::from(fold(c) == 'ё')
}

fn tertiary(c: char) -> u8 {
    u8::from(c.is_uppercase())
}

/// Сравнивает две строки по правилам русской сортировки.
///
/// Полное равенство на всех трёх уровнях разрешается побайтовым сравнением,
/// поэтому порядок детерминирован.
///
/// # Пример
/// ```
/// use regionmap::catalog::collation::compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare("Ёлки", "Жуки"), Ordering::Less);
/// assert_eq!(compare("ель", "Ель"), Ordering::Less);
/// ```
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary)
        .cmp(b.chars().map(primary))
        .then_with(|| a.chars().map(secondary).cmp(b.chars().map(secondary)))
        .then_with(|| a.chars().map(tertiary).cmp(b.chars().map(tertiary)))
        .then_with(|| a.cmp(b))
}
