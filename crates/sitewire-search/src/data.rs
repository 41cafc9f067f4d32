//! The hand-written encyclopedia dataset: six pages, four to five records
//! each. Order matters: result sets follow declaration order.

use crate::index::{PageRecords, SearchRecord};

macro_rules! records {
    ($(($title:expr, $keywords:expr)),* $(,)?) => {
        &[$(SearchRecord { title: $title, keywords: $keywords }),*]
    };
}

pub static BUILTIN_PAGES: &[PageRecords] = &[
    PageRecords {
        page: "index.html",
        records: records![
            ("China - Pagina Principală", "china, acasă, introducere, prezentare generală"),
            ("Geografie scurtă", "geografie, climă, relief"),
            ("Economie scurtă", "economie, PIB, export"),
            ("Cultură scurtă", "cultură, artă, tradiții"),
        ],
    },
    PageRecords {
        page: "istorie.html",
        records: records![
            ("Istoria Chinei", "istorie, dinastii, revoluții"),
            ("Dinastia Qin", "qin, primul împărat, marele zid"),
            ("Dinastia Han", "han, drumurile mătăsii, hârtie"),
            ("Dinastia Tang", "tang, vârful culturii, poezie"),
            ("Revoluția Culturală", "mao, revoluție culturală, gărzi roșii"),
        ],
    },
    PageRecords {
        page: "cultura.html",
        records: records![
            ("Cultura Chineză", "cultură, artă, muzică, teatru"),
            ("Limbi și Dialecte", "mandarin, cantonez, limbi"),
            ("Religii", "budism, taoism, confucianism"),
            ("Sărbători", "anul nou chinezesc, festivaluri"),
            ("Opera Beijing", "operă, teatru, muzică"),
        ],
    },
    PageRecords {
        page: "geografie.html",
        records: records![
            ("Geografia Chinei", "geografie, relief, climă"),
            ("Munții Himalaya", "himalaya, everest, munți"),
            ("Fluviul Yangtze", "yangtze, fluvii, râuri"),
            ("Platoul Tibet", "tibet, platou, altitudine"),
            ("Biodiversitate", "panda, animale, natură"),
        ],
    },
    PageRecords {
        page: "economie.html",
        records: records![
            ("Economia Chinei", "economie, PIB, comerț"),
            ("Sectoare Economice", "industrie, servicii, agricultură"),
            ("Comerț Exterior", "export, import, comerț"),
            ("Companii Chineze", "alibaba, tencent, huawei"),
            ("Belt and Road", "bri, infrastructură, investiții"),
        ],
    },
    PageRecords {
        page: "gastronomie.html",
        records: records![
            ("Gastronomia Chineză", "gastronomie, mâncare, bucătărie"),
            ("Bucătăria Sichuan", "sichuan, picant, mapo tofu"),
            ("Bucătăria Cantonez", "canton, dim sum, yum cha"),
            ("Rață Peking", "rață, beijing, peking"),
            ("Hot Pot", "hot pot, supă, fondue"),
        ],
    },
];
