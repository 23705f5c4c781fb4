use biotope_core::{CalendarDay, Season};

use crate::prompt::DATE_PLACEHOLDER;

const SPRING: [&str; 4] = [
    "{date}。やわらかな春の光が水面に揺れています。新しい季節の始まりに、ゆったりと泳ぐ魚たちを眺めて心をほどいてみてはいかがでしょうか。今日があなたにとって穏やかな一日になりますように。",
    "{date}。桜の便りが届く季節になりました。水槽の中でもいのちが芽吹くように、魚たちが元気に泳いでいます。あたたかな日差しとともに、すてきな出会いのある一日をお過ごしください。",
    "{date}。春風が心地よい季節ですね。きらきらと輝く水の世界で、小さな発見を楽しんでみてください。新しいことを始めるあなたを、魚たちもそっと応援しています。",
    "{date}。花々が彩る春の日です。水の中の生きものたちも、季節の移ろいを感じているようです。深呼吸をひとつして、のびのびとした気持ちで今日を楽しんでくださいね。",
];

const SUMMER: [&str; 4] = [
    "{date}。まぶしい夏の日差しが続いています。ひんやりとした水の世界で、涼しげに泳ぐ魚たちに癒やされてみませんか。水分補給を忘れずに、元気な一日をお過ごしください。",
    "{date}。青い空と海が恋しくなる季節です。水槽の中の小さな海で、色とりどりの魚たちが夏を楽しんでいます。あなたの夏にも、すてきな思い出が増えますように。",
    "{date}。夏の夜空に星がきらめく頃ですね。ゆらめく水の光を眺めていると、暑さも少しやわらぐようです。どうぞ無理をせず、心地よいひとときをお過ごしください。",
    "{date}。セミの声がにぎやかな夏の一日です。魚たちも元気いっぱいに泳ぎ回っています。涼やかな水の音に耳をすませて、ほっとひと息ついてみてくださいね。",
];

const AUTUMN: [&str; 4] = [
    "{date}。澄んだ空気が心地よい秋になりました。落ち着いた水の世界で、魚たちの優雅な泳ぎをゆっくり味わってみてはいかがでしょうか。実りの多い一日になりますように。",
    "{date}。木々が色づき始める季節ですね。水面に映る秋の光が、魚たちの姿をやさしく照らしています。読書や散歩とともに、穏やかな秋のひとときをお楽しみください。",
    "{date}。秋の夜長に月がきれいに見える頃です。静かに漂う魚たちを眺めながら、心を落ち着けてみてください。今日も一日、あなたらしく過ごせますように。",
    "{date}。さわやかな秋風が吹いています。水の中の生きものたちも、季節の変化を感じているようです。深まる秋を味わいながら、すてきな一日をお過ごしくださいね。",
];

const WINTER: [&str; 4] = [
    "{date}。冷たい空気に身が引き締まる冬の日です。水の中で静かにたたずむ魚たちを眺めて、心をあたためてみませんか。体調に気をつけて、穏やかな一日をお過ごしください。",
    "{date}。澄みきった冬の空がきれいな季節ですね。ゆったりと泳ぐ魚たちが、ひとときの安らぎを届けてくれます。あたたかい飲み物とともに、ほっとできる時間をお楽しみください。",
    "{date}。寒さの中にも、小さな春の気配を探したくなる頃です。水槽の中の生きものたちは、今日も元気に過ごしています。あなたの毎日にも、やさしい光が差しますように。",
    "{date}。冬の朝の静けさが心地よい日です。きらめく水の世界で、のんびりと泳ぐ魚たちに癒やされてください。今日という日が、あなたにとってあたたかな一日になりますように。",
];

fn templates(season: Season) -> &'static [&'static str] {
    match season {
        Season::Spring => &SPRING,
        Season::Summer => &SUMMER,
        Season::Autumn => &AUTUMN,
        Season::Winter => &WINTER,
    }
}

/// Deterministic offline message for `day`.
///
/// The season picks the template set and `(day_of_month - 1) mod 4` picks the
/// template, so the same calendar day always yields the same text.
#[must_use]
pub fn fallback_message(day: &CalendarDay) -> String {
    let set = templates(day.season());
    let index = (day.day().saturating_sub(1) as usize) % set.len();
    set[index].replace(DATE_PLACEHOLDER, &day.description_ja())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::from_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn every_template_has_one_placeholder() {
        for season in [Season::Spring, Season::Summer, Season::Autumn, Season::Winter] {
            let set = templates(season);
            assert_eq!(set.len(), 4);
            for template in set {
                assert_eq!(template.matches(DATE_PLACEHOLDER).count(), 1, "{template}");
            }
        }
    }

    #[test]
    fn tenth_of_april_uses_second_spring_template() {
        let message = fallback_message(&day(2025, 4, 10));
        let expected = SPRING[1].replace(DATE_PLACEHOLDER, "4月10日（木曜日）、春");
        assert_eq!(message, expected);
        assert!(message.starts_with("4月10日"));
    }

    #[test]
    fn same_day_yields_same_text() {
        assert_eq!(
            fallback_message(&day(2025, 7, 21)),
            fallback_message(&day(2025, 7, 21))
        );
    }

    #[test]
    fn index_cycles_through_the_month() {
        // Day 1 and day 5 share a template; only the date text differs.
        let first = fallback_message(&day(2025, 12, 1));
        let fifth = fallback_message(&day(2025, 12, 5));
        assert_eq!(
            first.replace(&day(2025, 12, 1).description_ja(), ""),
            fifth.replace(&day(2025, 12, 5).description_ja(), "")
        );
        assert!(first.contains("冬"));
    }

    #[test]
    fn season_selects_template_set() {
        let autumn = fallback_message(&day(2025, 10, 1));
        assert_eq!(
            autumn,
            AUTUMN[0].replace(DATE_PLACEHOLDER, &day(2025, 10, 1).description_ja())
        );
    }
}
