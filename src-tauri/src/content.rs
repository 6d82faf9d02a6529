//! Static content shown in the dashboard modals: communication scripts,
//! learning chapters and downloadable materials.
//!
//! Lookups are by title. A title with no match returns an empty default
//! item rather than an error.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScriptLine {
    pub speaker: String,
    pub line: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommunicationScript {
    pub title: String,
    pub scenario: String,
    pub lines: Vec<ScriptLine>,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LearningChapter {
    pub title: String,
    pub summary: String,
    pub sections: Vec<String>,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Material {
    pub title: String,
    pub kind: String,
    pub format: String,
    pub size: String,
    pub updated_at: String,
    pub description: String,
}

/// Catalogue of modal content, looked up by title.
#[derive(Debug, Clone, Default)]
pub struct ContentLibrary {
    scripts: Vec<CommunicationScript>,
    chapters: Vec<LearningChapter>,
    materials: Vec<Material>,
}

impl ContentLibrary {
    pub fn new(
        scripts: Vec<CommunicationScript>,
        chapters: Vec<LearningChapter>,
        materials: Vec<Material>,
    ) -> Self {
        Self {
            scripts,
            chapters,
            materials,
        }
    }

    pub fn script(&self, title: &str) -> CommunicationScript {
        find_or_default(&self.scripts, |s| s.title == title)
    }

    pub fn chapter(&self, title: &str) -> LearningChapter {
        find_or_default(&self.chapters, |c| c.title == title)
    }

    pub fn material(&self, title: &str) -> Material {
        find_or_default(&self.materials, |m| m.title == title)
    }

    pub fn script_titles(&self) -> Vec<String> {
        self.scripts.iter().map(|s| s.title.clone()).collect()
    }

    pub fn chapter_titles(&self) -> Vec<String> {
        self.chapters.iter().map(|c| c.title.clone()).collect()
    }

    pub fn material_titles(&self) -> Vec<String> {
        self.materials.iter().map(|m| m.title.clone()).collect()
    }

    /// The content shipped with the app.
    pub fn builtin() -> Self {
        Self::new(builtin_scripts(), builtin_chapters(), builtin_materials())
    }
}

fn find_or_default<T: Clone + Default>(items: &[T], pred: impl Fn(&T) -> bool) -> T {
    items.iter().find(|item| pred(item)).cloned().unwrap_or_default()
}

fn line(speaker: &str, text: &str) -> ScriptLine {
    ScriptLine {
        speaker: speaker.to_string(),
        line: text.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn builtin_scripts() -> Vec<CommunicationScript> {
    vec![
        CommunicationScript {
            title: "价格异议处理".to_string(),
            scenario: "客户认为报价高于竞品".to_string(),
            lines: vec![
                line("客户", "你们的价格比别家贵了不少。"),
                line("销售", "理解您的顾虑。除了采购价格，您也关心设备在五年内的总体使用成本吧？"),
                line("客户", "当然，维护费用也很重要。"),
                line("销售", "我们的设备含三年免费保修，耗材成本比行业平均低约 15%，我把测算表发给您参考。"),
            ],
            tips: strings(&["先认同再引导", "用数据说话", "不要第一时间降价"]),
        },
        CommunicationScript {
            title: "首次拜访开场".to_string(),
            scenario: "第一次与科室负责人见面".to_string(),
            lines: vec![
                line("销售", "您好，我是负责本区域的销售顾问，今天主要想了解一下科室目前的设备使用情况。"),
                line("客户", "可以，你简单说说。"),
                line("销售", "目前科室最希望改善的环节是哪一部分？"),
            ],
            tips: strings(&["控制在十分钟内", "多问少说", "约定下一次沟通时间"]),
        },
        CommunicationScript {
            title: "方案推进".to_string(),
            scenario: "客户已认可需求，推进演示与报价".to_string(),
            lines: vec![
                line("销售", "根据上次沟通的需求，我们准备了针对性的配置方案。"),
                line("销售", "下周安排一次科室演示是否方便？"),
            ],
            tips: strings(&["提前确认参会人", "准备同级医院案例"]),
        },
    ]
}

fn builtin_chapters() -> Vec<LearningChapter> {
    vec![
        LearningChapter {
            title: "需求挖掘".to_string(),
            summary: "通过结构化提问识别客户的显性与隐性需求".to_string(),
            sections: strings(&["背景问题", "难点问题", "暗示问题", "需求效益问题"]),
            duration_minutes: 25,
        },
        LearningChapter {
            title: "异议处理".to_string(),
            summary: "识别异议类型并给出针对性的回应".to_string(),
            sections: strings(&["价格异议", "竞品异议", "时机异议"]),
            duration_minutes: 20,
        },
        LearningChapter {
            title: "谈判成交".to_string(),
            summary: "把握成交信号，推动客户做出决策".to_string(),
            sections: strings(&["成交信号识别", "让步策略", "合同条款确认"]),
            duration_minutes: 30,
        },
    ]
}

fn builtin_materials() -> Vec<Material> {
    vec![
        Material {
            title: "产品白皮书".to_string(),
            kind: "产品资料".to_string(),
            format: "PDF".to_string(),
            size: "4.2 MB".to_string(),
            updated_at: "2024-05-20".to_string(),
            description: "全线产品技术参数与临床应用场景".to_string(),
        },
        Material {
            title: "三甲医院成功案例集".to_string(),
            kind: "案例".to_string(),
            format: "PPT".to_string(),
            size: "12.8 MB".to_string(),
            updated_at: "2024-06-02".to_string(),
            description: "十家三甲医院的采购背景、方案与使用效果".to_string(),
        },
        Material {
            title: "竞品对比分析".to_string(),
            kind: "竞品".to_string(),
            format: "XLSX".to_string(),
            size: "860 KB".to_string(),
            updated_at: "2024-04-15".to_string(),
            description: "主要竞品的价格、参数和售后政策对比".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_lookup_by_title() {
        let lib = ContentLibrary::builtin();
        let script = lib.script("价格异议处理");
        assert_eq!(script.title, "价格异议处理");
        assert!(!script.lines.is_empty());
    }

    #[test]
    fn test_unknown_titles_fall_back_to_empty_default() {
        let lib = ContentLibrary::builtin();
        assert_eq!(lib.script("不存在"), CommunicationScript::default());
        assert_eq!(lib.chapter("不存在"), LearningChapter::default());
        assert_eq!(lib.material("不存在"), Material::default());
    }

    #[test]
    fn test_titles_listed_in_order() {
        let lib = ContentLibrary::builtin();
        assert_eq!(lib.chapter_titles(), vec!["需求挖掘", "异议处理", "谈判成交"]);
        assert_eq!(lib.material_titles().len(), 3);
        assert_eq!(lib.script_titles()[0], "价格异议处理");
    }

    #[test]
    fn test_empty_library_never_fails() {
        let lib = ContentLibrary::default();
        assert!(lib.material("产品白皮书").title.is_empty());
    }
}
