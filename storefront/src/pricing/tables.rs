use super::{usd, PlanPrice, PricingCategory, PricingPlan, PricingTable};
use crate::i18n::Locale;
use crate::order::vocabulary::{IPV6_SERVICE_ID, ISP_SERVICE_ID, ROTATING_SERVICE_ID};

pub fn pricing_tables(locale: Locale) -> Vec<PricingTable> {
    vec![isp_table(locale), ipv6_table(locale), rotating_table(locale)]
}

fn isp_table(l: Locale) -> PricingTable {
    let per_proxy = l.pick("per proxy / month", "за прокси / месяц");

    PricingTable {
        service_id: ISP_SERVICE_ID,
        name: l.pick("Static ISP proxies", "Статические ISP прокси"),
        tagline: l.pick(
            "Residential-grade IPs hosted in data centers. Stable, fast, yours alone.",
            "IP домашних провайдеров в дата-центрах. Стабильно, быстро, только ваши.",
        ),
        categories: vec![
            PricingCategory {
                id: "basic",
                label: l.pick("Basic", "Базовый"),
                plans: vec![
                    PricingPlan {
                        id: "isp-basic",
                        name: l.pick("Basic", "Базовый"),
                        price: PlanPrice::PerUnit(usd(300)),
                        period: per_proxy,
                        features: vec![
                            l.pick("Shared subnet", "Общая подсеть"),
                            l.pick("HTTP(S) and SOCKS5", "HTTP(S) и SOCKS5"),
                            l.pick("Unlimited traffic", "Безлимитный трафик"),
                        ],
                        ribbon: None,
                        multiplier: None,
                    },
                    PricingPlan {
                        id: "isp-trial",
                        name: l.pick("Trial", "Пробный"),
                        price: PlanPrice::PerUnit(usd(300)),
                        period: l.pick("per proxy / 7 days", "за прокси / 7 дней"),
                        features: vec![
                            l.pick("Same network as Basic", "Та же сеть, что и в Базовом"),
                            l.pick("7 days of access", "7 дней доступа"),
                        ],
                        ribbon: Some(l.pick("7 days", "7 дней")),
                        multiplier: Some((7, 30)),
                    },
                ],
            },
            PricingCategory {
                id: "premium",
                label: l.pick("Premium", "Премиум"),
                plans: vec![
                    PricingPlan {
                        id: "isp-premium",
                        name: l.pick("Premium", "Премиум"),
                        price: PlanPrice::PerUnit(usd(550)),
                        period: per_proxy,
                        features: vec![
                            l.pick("Private /24 subnets", "Частные подсети /24"),
                            l.pick("HTTP(S) and SOCKS5", "HTTP(S) и SOCKS5"),
                            l.pick("Unlimited traffic", "Безлимитный трафик"),
                            l.pick("Free replacement", "Бесплатная замена"),
                        ],
                        ribbon: Some(l.pick("Popular", "Популярный")),
                        multiplier: None,
                    },
                    PricingPlan {
                        id: "isp-dedicated",
                        name: l.pick("Dedicated", "Выделенный"),
                        price: PlanPrice::PerUnit(usd(800)),
                        period: per_proxy,
                        features: vec![
                            l.pick("Never shared with anyone", "Никогда не передаются другим"),
                            l.pick("10 Gbps uplink", "Канал 10 Гбит/с"),
                            l.pick("Priority support", "Приоритетная поддержка"),
                        ],
                        ribbon: None,
                        multiplier: None,
                    },
                ],
            },
        ],
    }
}

fn ipv6_table(l: Locale) -> PricingTable {
    let per_proxy = l.pick("per proxy / month", "за прокси / месяц");

    PricingTable {
        service_id: IPV6_SERVICE_ID,
        name: l.pick("Static IPv6 proxies", "Статические IPv6 прокси"),
        tagline: l.pick(
            "Huge pools of clean IPv6 addresses for sites that support them.",
            "Огромные пулы чистых IPv6-адресов для сайтов с их поддержкой.",
        ),
        categories: vec![
            PricingCategory {
                id: "basic",
                label: l.pick("Basic", "Базовый"),
                plans: vec![PricingPlan {
                    id: "ipv6-basic",
                    name: l.pick("Basic", "Базовый"),
                    price: PlanPrice::PerUnit(usd(35)),
                    period: per_proxy,
                    features: vec![
                        l.pick("/64 per proxy", "/64 на прокси"),
                        l.pick("HTTP(S) and SOCKS5", "HTTP(S) и SOCKS5"),
                    ],
                    ribbon: None,
                    multiplier: None,
                }],
            },
            PricingCategory {
                id: "premium",
                label: l.pick("Premium", "Премиум"),
                plans: vec![
                    PricingPlan {
                        id: "ipv6-premium",
                        name: l.pick("Premium", "Премиум"),
                        price: PlanPrice::PerUnit(usd(60)),
                        period: per_proxy,
                        features: vec![
                            l.pick("/48 per proxy", "/48 на прокси"),
                            l.pick("Rotation on demand", "Смена IP по запросу"),
                            l.pick("HTTP(S) and SOCKS5", "HTTP(S) и SOCKS5"),
                        ],
                        ribbon: Some(l.pick("Best value", "Выгодно")),
                        multiplier: None,
                    },
                    PricingPlan {
                        id: "ipv6-enterprise",
                        name: l.pick("Enterprise", "Корпоративный"),
                        price: PlanPrice::Quote(l.pick("Custom", "По запросу")),
                        period: l.pick("volume pricing", "оптовая цена"),
                        features: vec![
                            l.pick("Dedicated /32 allocations", "Выделенные блоки /32"),
                            l.pick("Custom ASN announcements", "Анонс собственного ASN"),
                            l.pick("Account manager", "Персональный менеджер"),
                        ],
                        ribbon: None,
                        multiplier: None,
                    },
                ],
            },
        ],
    }
}

fn rotating_table(l: Locale) -> PricingTable {
    let per_month = l.pick("per month", "в месяц");
    let traffic_features = || {
        vec![
            l.pick("70M+ residential IPs", "70+ млн резидентных IP"),
            l.pick("Country and city targeting", "Таргетинг по стране и городу"),
            l.pick("Sticky sessions up to 30 min", "Липкие сессии до 30 минут"),
        ]
    };

    PricingTable {
        service_id: ROTATING_SERVICE_ID,
        name: l.pick("Rotating residential proxies", "Ротационные резидентные прокси"),
        tagline: l.pick(
            "A fresh residential IP on every request, billed by traffic or by port.",
            "Новый резидентный IP на каждый запрос, оплата за трафик или за порт.",
        ),
        categories: vec![
            PricingCategory {
                id: "bandwidth",
                label: l.pick("Bandwidth", "Трафик"),
                plans: vec![
                    PricingPlan {
                        id: "rotating-1",
                        name: "1 GB",
                        price: PlanPrice::Traffic {
                            gb: 1,
                            price_per_gb_usd: None,
                            total_usd: Some(usd(599)),
                        },
                        period: per_month,
                        features: traffic_features(),
                        ribbon: None,
                        multiplier: None,
                    },
                    PricingPlan {
                        id: "rotating-10",
                        name: "10 GB",
                        price: PlanPrice::Traffic {
                            gb: 10,
                            price_per_gb_usd: None,
                            total_usd: Some(usd(4999)),
                        },
                        period: per_month,
                        features: traffic_features(),
                        ribbon: Some(l.pick("Popular", "Популярный")),
                        multiplier: None,
                    },
                    PricingPlan {
                        id: "rotating-50",
                        name: "50 GB",
                        price: PlanPrice::Traffic {
                            gb: 50,
                            price_per_gb_usd: Some(usd(420)),
                            total_usd: None,
                        },
                        period: per_month,
                        features: traffic_features(),
                        ribbon: None,
                        multiplier: None,
                    },
                    PricingPlan {
                        id: "rotating-100",
                        name: "100 GB",
                        price: PlanPrice::Traffic {
                            gb: 100,
                            price_per_gb_usd: Some(usd(350)),
                            total_usd: None,
                        },
                        period: per_month,
                        features: traffic_features(),
                        ribbon: None,
                        multiplier: None,
                    },
                    PricingPlan {
                        id: "rotating-1000",
                        name: "1 TB",
                        price: PlanPrice::Traffic {
                            gb: 1000,
                            price_per_gb_usd: None,
                            total_usd: Some(usd(99000)),
                        },
                        period: per_month,
                        features: traffic_features(),
                        ribbon: Some(l.pick("Best price per GB", "Лучшая цена за ГБ")),
                        multiplier: None,
                    },
                ],
            },
            PricingCategory {
                id: "ports",
                label: l.pick("Ports", "Порты"),
                plans: vec![
                    PricingPlan {
                        id: "rotating-ports-10",
                        name: l.pick("Unlimited port", "Безлимитный порт"),
                        price: PlanPrice::PerUnit(usd(1500)),
                        period: l.pick("per port / month", "за порт / месяц"),
                        features: vec![
                            l.pick("Unlimited traffic per port", "Безлимитный трафик на порт"),
                            l.pick("Up to 100 Mbps", "До 100 Мбит/с"),
                        ],
                        ribbon: None,
                        multiplier: None,
                    },
                    PricingPlan {
                        id: "rotating-ports-50",
                        name: l.pick("Turbo port", "Турбо-порт"),
                        price: PlanPrice::PerUnit(usd(4500)),
                        period: l.pick("per port / month", "за порт / месяц"),
                        features: vec![
                            l.pick("Unlimited traffic per port", "Безлимитный трафик на порт"),
                            l.pick("Up to 500 Mbps", "До 500 Мбит/с"),
                            l.pick("Dedicated gateway", "Выделенный шлюз"),
                        ],
                        ribbon: None,
                        multiplier: None,
                    },
                ],
            },
        ],
    }
}
