//! Static legal copy.

use crate::i18n::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalPage {
    Terms,
    Privacy,
    Refund,
}

impl LegalPage {
    pub const ALL: [LegalPage; 3] = [LegalPage::Terms, LegalPage::Privacy, LegalPage::Refund];

    pub fn slug(self) -> &'static str {
        match self {
            LegalPage::Terms => "terms",
            LegalPage::Privacy => "privacy",
            LegalPage::Refund => "refund",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.slug() == slug)
    }

    pub fn document(self, locale: Locale) -> &'static LegalDocument {
        match (self, locale) {
            (LegalPage::Terms, Locale::En) => &TERMS_EN,
            (LegalPage::Terms, Locale::Ru) => &TERMS_RU,
            (LegalPage::Privacy, Locale::En) => &PRIVACY_EN,
            (LegalPage::Privacy, Locale::Ru) => &PRIVACY_RU,
            (LegalPage::Refund, Locale::En) => &REFUND_EN,
            (LegalPage::Refund, Locale::Ru) => &REFUND_RU,
        }
    }
}

#[derive(Debug)]
pub struct LegalDocument {
    pub title: &'static str,
    pub updated: &'static str,
    pub sections: &'static [LegalSection],
}

#[derive(Debug)]
pub struct LegalSection {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

static TERMS_EN: LegalDocument = LegalDocument {
    title: "Terms of Service",
    updated: "Last updated: 1 March 2026",
    sections: &[
        LegalSection {
            heading: "1. Service",
            paragraphs: &[
                "ProxyForge provides access to static ISP, static IPv6 and rotating residential proxies for the period and volume you purchase.",
                "Access details are delivered to the contact address given at checkout once the payment is confirmed on-chain.",
            ],
        },
        LegalSection {
            heading: "2. Acceptable use",
            paragraphs: &[
                "You may not use the proxies for spam, fraud, credential stuffing, attacks on third-party systems or any activity that is unlawful where you or the target are located.",
                "We suspend access without refund when abuse reports are confirmed.",
            ],
        },
        LegalSection {
            heading: "3. Payment",
            paragraphs: &[
                "Prices are listed in US dollars and charged in cryptocurrency at the rate fixed when the invoice is created. Network fees are paid by the customer.",
            ],
        },
        LegalSection {
            heading: "4. Liability",
            paragraphs: &[
                "The service is provided as is. Our liability is limited to the amount paid for the affected billing period.",
            ],
        },
    ],
};

static TERMS_RU: LegalDocument = LegalDocument {
    title: "Условия использования",
    updated: "Обновлено: 1 марта 2026",
    sections: &[
        LegalSection {
            heading: "1. Услуга",
            paragraphs: &[
                "ProxyForge предоставляет доступ к статическим ISP, статическим IPv6 и ротационным резидентным прокси на оплаченный срок и в оплаченном объёме.",
                "Данные для доступа отправляются на контактный адрес, указанный при оплате, после подтверждения платежа в сети.",
            ],
        },
        LegalSection {
            heading: "2. Допустимое использование",
            paragraphs: &[
                "Запрещено использовать прокси для спама, мошенничества, перебора учётных данных, атак на чужие системы и любой деятельности, незаконной в вашей юрисдикции или юрисдикции цели.",
                "При подтверждённых жалобах доступ приостанавливается без возврата средств.",
            ],
        },
        LegalSection {
            heading: "3. Оплата",
            paragraphs: &[
                "Цены указаны в долларах США и оплачиваются криптовалютой по курсу, зафиксированному при создании счёта. Комиссию сети оплачивает покупатель.",
            ],
        },
        LegalSection {
            heading: "4. Ответственность",
            paragraphs: &[
                "Услуга предоставляется «как есть». Наша ответственность ограничена суммой, оплаченной за затронутый период.",
            ],
        },
    ],
};

static PRIVACY_EN: LegalDocument = LegalDocument {
    title: "Privacy Policy",
    updated: "Last updated: 1 March 2026",
    sections: &[
        LegalSection {
            heading: "What we store",
            paragraphs: &[
                "We keep no accounts. The site sets two cookies: your language and your last order selection, both readable only by this site.",
                "The payment processor receives the order amount, a short order description and return URLs. We do not see your wallet.",
            ],
        },
        LegalSection {
            heading: "Logs",
            paragraphs: &[
                "Request logs contain the request path and a random request id and are kept for 14 days for troubleshooting.",
            ],
        },
    ],
};

static PRIVACY_RU: LegalDocument = LegalDocument {
    title: "Политика конфиденциальности",
    updated: "Обновлено: 1 марта 2026",
    sections: &[
        LegalSection {
            heading: "Что мы храним",
            paragraphs: &[
                "У нас нет учётных записей. Сайт устанавливает два cookie: язык и последний выбор заказа, оба доступны только этому сайту.",
                "Платёжный процессор получает сумму заказа, краткое описание и адреса возврата. Ваш кошелёк нам не виден.",
            ],
        },
        LegalSection {
            heading: "Журналы",
            paragraphs: &[
                "Журналы запросов содержат путь запроса и случайный идентификатор и хранятся 14 дней для диагностики.",
            ],
        },
    ],
};

static REFUND_EN: LegalDocument = LegalDocument {
    title: "Refund Policy",
    updated: "Last updated: 1 March 2026",
    sections: &[
        LegalSection {
            heading: "Eligibility",
            paragraphs: &[
                "Static proxies can be refunded within 24 hours of delivery if they do not work as described and we cannot replace them.",
                "Rotating bandwidth is refundable only while unused. Trials are not refundable.",
            ],
        },
        LegalSection {
            heading: "How refunds are paid",
            paragraphs: &[
                "Refunds are sent in the cryptocurrency used for payment, at the dollar amount paid, minus network fees.",
            ],
        },
    ],
};

static REFUND_RU: LegalDocument = LegalDocument {
    title: "Политика возврата",
    updated: "Обновлено: 1 марта 2026",
    sections: &[
        LegalSection {
            heading: "Условия",
            paragraphs: &[
                "За статические прокси можно вернуть средства в течение 24 часов после выдачи, если они не работают как заявлено и мы не можем их заменить.",
                "Ротационный трафик возвращается только неиспользованным. Пробные тарифы не возвращаются.",
            ],
        },
        LegalSection {
            heading: "Как выплачивается возврат",
            paragraphs: &[
                "Возврат отправляется в той криптовалюте, которой был оплачен заказ, на сумму в долларах за вычетом комиссии сети.",
            ],
        },
    ],
};
