//! Built-in fixture data standing in for a CRM backend.
//!
//! Each department has its own client list, KPI set and competency history.

use crate::clients::{ClientRecord, ContactMethod, Stage};
use crate::metrics::{CompetencyHistory, CompetencyScore, CompetencySnapshot, Kpi, MonthlyPoint};

struct ClientSeed<'a> {
    id: &'a str,
    name: &'a str,
    contact: &'a str,
    method: ContactMethod,
    time: &'a str,
    stage: Stage,
    tags: &'a [&'a str],
    concerns: &'a [&'a str],
    suggestion: &'a str,
    next_action: &'a str,
    background: &'a str,
}

impl ClientSeed<'_> {
    fn build(self) -> ClientRecord {
        ClientRecord {
            id: self.id.to_string(),
            name: self.name.to_string(),
            contact: self.contact.to_string(),
            last_contact_method: self.method,
            last_contact_time: self.time.to_string(),
            stage: self.stage,
            tags: self.tags.iter().map(|s| s.to_string()).collect(),
            concerns: self.concerns.iter().map(|s| s.to_string()).collect(),
            suggestion: self.suggestion.to_string(),
            next_action: self.next_action.to_string(),
            analysis_background: self.background.to_string(),
        }
    }
}

pub fn medical_clients() -> Vec<ClientRecord> {
    vec![
        ClientSeed {
            id: "med-001",
            name: "北京协和医院",
            contact: "张伟主任 zhangwei@pumch.cn",
            method: ContactMethod::Visit,
            time: "今天 09:30",
            stage: Stage::Intent,
            tags: &["三甲医院", "重点客户", "设备更新"],
            concerns: &["采购预算审批周期长", "售后响应速度"],
            suggestion: "准备分期付款方案，并提供同级医院的售后响应数据",
            next_action: "周四前提交正式报价与售后服务承诺书",
            background: "影像科计划年内更新两台超声设备，主任对国产设备接受度较高，但财务处对一次性投入较为谨慎。",
        }
        .build(),
        ClientSeed {
            id: "med-002",
            name: "上海瑞金医院",
            contact: "李娜科长 lina@rjh.com.cn",
            method: ContactMethod::Email,
            time: "昨天 16:10",
            stage: Stage::Potential,
            tags: &["三甲医院", "新客户"],
            concerns: &["与现有系统的兼容性"],
            suggestion: "安排技术工程师进行现场兼容性评估",
            next_action: "发送兼容性白皮书并预约技术交流会",
            background: "设备科正在梳理下一年度采购清单，目前仅处于信息收集阶段，尚未形成明确需求。",
        }
        .build(),
        ClientSeed {
            id: "med-003",
            name: "广州中山医院",
            contact: "王强院长 wangqiang@gzzs.org",
            method: ContactMethod::Phone,
            time: "今天 11:00",
            stage: Stage::Intent,
            tags: &["价格敏感", "决策快"],
            concerns: &["价格高于竞品", "培训成本"],
            suggestion: "强调总体拥有成本，提供免费操作培训",
            next_action: "本周内安排院长参观样板医院",
            background: "医院正在扩建门诊楼，新科室设备需在季度内到位，竞品已提交报价，价格是主要分歧点。",
        }
        .build(),
        ClientSeed {
            id: "med-004",
            name: "成都华西医院",
            contact: "赵敏护士长 zhaomin@wchscu.cn",
            method: ContactMethod::WeChat,
            time: "3天前",
            stage: Stage::Interest,
            tags: &["学术合作", "区域标杆"],
            concerns: &["临床数据支持"],
            suggestion: "邀请参加下月学术沙龙，分享多中心临床数据",
            next_action: "发送学术沙龙邀请函和产品临床资料",
            background: "护理部对新型监护设备有兴趣，希望先看到临床研究结果，再决定是否推动立项。",
        }
        .build(),
    ]
}

pub fn education_clients() -> Vec<ClientRecord> {
    vec![
        ClientSeed {
            id: "edu-001",
            name: "清华大学医学院",
            contact: "陈老师 chen@tsinghua.edu.cn",
            method: ContactMethod::Email,
            time: "今天 10:15",
            stage: Stage::Intent,
            tags: &["教学设备", "科研项目"],
            concerns: &["科研经费使用规定"],
            suggestion: "整理符合科研经费采购规定的配置清单",
            next_action: "提交配置清单与科研合作方案",
            background: "实验教学中心计划建设模拟诊疗实训室，需要在经费执行期内完成采购。",
        }
        .build(),
        ClientSeed {
            id: "edu-002",
            name: "浙江中医药大学",
            contact: "周主任 zhou@zcmu.edu.cn",
            method: ContactMethod::Visit,
            time: "2天前",
            stage: Stage::Interest,
            tags: &["新客户"],
            concerns: &["设备占地面积", "维护难度"],
            suggestion: "提供紧凑型配置与远程运维方案",
            next_action: "预约实训室现场勘测",
            background: "学校新建实训楼，场地规划尚未最终确定，对设备尺寸较为敏感。",
        }
        .build(),
        ClientSeed {
            id: "edu-003",
            name: "南方医科大学",
            contact: "吴教授 wu@smu.edu.cn",
            method: ContactMethod::WeChat,
            time: "昨天 14:40",
            stage: Stage::Potential,
            tags: &["学术合作"],
            concerns: &["招标流程"],
            suggestion: "协助准备招标技术参数",
            next_action: "发送招标参数建议稿",
            background: "学院计划明年启动公开招标，目前在调研各厂家的技术参数。",
        }
        .build(),
    ]
}

pub fn enterprise_clients() -> Vec<ClientRecord> {
    vec![
        ClientSeed {
            id: "ent-001",
            name: "美年大健康",
            contact: "孙经理 sun@meinian.cn",
            method: ContactMethod::Phone,
            time: "今天 15:20",
            stage: Stage::Intent,
            tags: &["连锁体检", "批量采购"],
            concerns: &["批量折扣", "交付周期"],
            suggestion: "制定阶梯价格方案并确认分批交付计划",
            next_action: "下周一前给出阶梯报价",
            background: "体检中心全国扩张，计划分三批采购超声和心电设备。",
        }
        .build(),
        ClientSeed {
            id: "ent-002",
            name: "爱康国宾",
            contact: "钱总监 qian@ikang.com",
            method: ContactMethod::Visit,
            time: "4天前",
            stage: Stage::Potential,
            tags: &["连锁体检"],
            concerns: &["数据对接"],
            suggestion: "演示与体检信息系统的数据对接能力",
            next_action: "安排信息部门技术交流",
            background: "信息化部门主导选型，更关注设备数据能否直接进入现有体检报告系统。",
        }
        .build(),
        ClientSeed {
            id: "ent-003",
            name: "平安好医生",
            contact: "郑主管 zheng@pingan.com",
            method: ContactMethod::Email,
            time: "一周前",
            stage: Stage::Interest,
            tags: &["互联网医疗", "价格敏感"],
            concerns: &["远程诊断适配"],
            suggestion: "提供远程诊断场景的试用设备",
            next_action: "寄送试用设备并跟进使用反馈",
            background: "正在探索线下诊所布局，对便携式设备和远程诊断能力感兴趣。",
        }
        .build(),
    ]
}

fn trend(values: &[(&str, f64)]) -> Vec<MonthlyPoint> {
    values
        .iter()
        .map(|(month, value)| MonthlyPoint {
            month: month.to_string(),
            value: *value,
        })
        .collect()
}

fn kpi(key: &str, label: &str, value: f64, target: f64, unit: &str, points: &[(&str, f64)]) -> Kpi {
    Kpi {
        key: key.to_string(),
        label: label.to_string(),
        value,
        target,
        unit: unit.to_string(),
        trend: trend(points),
    }
}

const MONTHS: [&str; 6] = ["2024-01", "2024-02", "2024-03", "2024-04", "2024-05", "2024-06"];

fn monthly(values: [f64; 6]) -> Vec<(&'static str, f64)> {
    MONTHS.iter().copied().zip(values).collect()
}

pub fn medical_kpis() -> Vec<Kpi> {
    vec![
        kpi("revenue", "销售额", 312.0, 400.0, "万元", &monthly([210.0, 180.0, 260.0, 240.0, 285.0, 312.0])),
        kpi("new_clients", "新增意向客户", 6.0, 8.0, "家", &monthly([3.0, 2.0, 5.0, 4.0, 4.0, 6.0])),
        kpi("visits", "客户拜访", 23.0, 25.0, "次", &monthly([18.0, 15.0, 22.0, 20.0, 21.0, 23.0])),
        kpi("conversion", "转化率", 18.0, 20.0, "%", &monthly([12.0, 11.0, 15.0, 14.0, 16.0, 18.0])),
    ]
}

pub fn education_kpis() -> Vec<Kpi> {
    vec![
        kpi("revenue", "销售额", 146.0, 200.0, "万元", &monthly([90.0, 60.0, 120.0, 110.0, 130.0, 146.0])),
        kpi("new_clients", "新增意向客户", 3.0, 5.0, "家", &monthly([1.0, 1.0, 2.0, 3.0, 2.0, 3.0])),
        kpi("visits", "客户拜访", 14.0, 15.0, "次", &monthly([10.0, 6.0, 12.0, 13.0, 12.0, 14.0])),
    ]
}

pub fn enterprise_kpis() -> Vec<Kpi> {
    vec![
        kpi("revenue", "销售额", 520.0, 500.0, "万元", &monthly([380.0, 350.0, 410.0, 460.0, 495.0, 520.0])),
        kpi("new_clients", "新增意向客户", 4.0, 4.0, "家", &monthly([2.0, 3.0, 2.0, 4.0, 3.0, 4.0])),
        kpi("conversion", "转化率", 24.0, 22.0, "%", &monthly([19.0, 18.0, 21.0, 22.0, 23.0, 24.0])),
    ]
}

const DIMENSIONS: [&str; 5] = ["需求挖掘", "异议处理", "产品知识", "客户关系", "谈判成交"];

fn snapshot(period: &str, scores: [u8; 5]) -> CompetencySnapshot {
    CompetencySnapshot {
        period: period.to_string(),
        scores: DIMENSIONS
            .iter()
            .zip(scores)
            .map(|(dimension, score)| CompetencyScore {
                dimension: dimension.to_string(),
                score,
            })
            .collect(),
    }
}

pub fn medical_competency() -> CompetencyHistory {
    CompetencyHistory::new(vec![
        snapshot("2023 Q3", [58, 52, 70, 66, 48]),
        snapshot("2023 Q4", [63, 55, 74, 68, 53]),
        snapshot("2024 Q1", [67, 61, 78, 71, 57]),
        snapshot("2024 Q2", [72, 65, 82, 75, 62]),
    ])
}

pub fn education_competency() -> CompetencyHistory {
    CompetencyHistory::new(vec![
        snapshot("2024 Q1", [61, 58, 75, 80, 50]),
        snapshot("2024 Q2", [66, 57, 79, 82, 55]),
    ])
}

pub fn enterprise_competency() -> CompetencyHistory {
    CompetencyHistory::new(vec![
        snapshot("2023 Q4", [70, 68, 65, 72, 74]),
        snapshot("2024 Q1", [73, 71, 66, 74, 78]),
        snapshot("2024 Q2", [75, 74, 70, 73, 81]),
    ])
}
