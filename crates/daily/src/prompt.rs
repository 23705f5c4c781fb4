use biotope_core::CalendarDay;

/// Placeholder substituted with the localized date description.
pub const DATE_PLACEHOLDER: &str = "{date}";

const PROMPT_TEMPLATE: &str = "\
今日は{date}です。
水族館を訪れた方に向けて、今日という日にふさわしい短いメッセージを日本語で書いてください。

条件:
- です・ます調の丁寧な言葉遣いにすること
- 前向きで温かみのある内容にすること
- {date}の季節感に合った話題を入れること
- 200文字程度にまとめること
- メッセージ本文を1つだけ出力し、前置きや説明、見出しは付けないこと";

/// Render the generation prompt for `day`.
#[must_use]
pub fn build_prompt(day: &CalendarDay) -> String {
    PROMPT_TEMPLATE.replace(DATE_PLACEHOLDER, &day.description_ja())
}
