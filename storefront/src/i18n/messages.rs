/// UI strings for one locale. Catalog names and features live with the
/// pricing tables; this holds page chrome and form labels.
#[derive(Debug)]
pub struct Messages {
    pub brand: &'static str,
    pub nav_home: &'static str,
    pub nav_pricing: &'static str,
    pub nav_order: &'static str,
    pub footer_terms: &'static str,
    pub footer_privacy: &'static str,
    pub footer_refund: &'static str,
    pub footer_rights: &'static str,

    pub home_title: &'static str,
    pub home_lead: &'static str,
    pub home_cta: &'static str,
    pub home_products_heading: &'static str,
    pub home_why_heading: &'static str,
    pub home_why_points: &'static [&'static str],
    pub home_view_plans: &'static str,
    pub home_from: &'static str,

    pub pricing_title: &'static str,
    pub pricing_lead: &'static str,
    pub pricing_order_button: &'static str,
    pub pricing_per_gb: &'static str,

    pub order_title: &'static str,
    pub order_service: &'static str,
    pub order_category: &'static str,
    pub order_tier: &'static str,
    pub order_location: &'static str,
    pub order_quantity: &'static str,
    pub order_period: &'static str,
    pub order_recalculate: &'static str,
    pub order_summary: &'static str,
    pub order_unit_price: &'static str,
    pub order_total: &'static str,
    pub order_pay: &'static str,
    pub order_pay_note: &'static str,
    pub order_contact_sales: &'static str,
    pub order_trial_note: &'static str,

    pub checkout_failed: &'static str,
    pub checkout_unavailable: &'static str,

    pub success_title: &'static str,
    pub success_body: &'static str,
    pub success_back: &'static str,
}

pub static EN: Messages = Messages {
    brand: "ProxyForge",
    nav_home: "Home",
    nav_pricing: "Pricing",
    nav_order: "Order",
    footer_terms: "Terms of Service",
    footer_privacy: "Privacy Policy",
    footer_refund: "Refund Policy",
    footer_rights: "All rights reserved.",

    home_title: "Fast, clean proxies for serious workloads",
    home_lead: "Static ISP, IPv6 and rotating residential proxies with instant delivery and crypto checkout.",
    home_cta: "Configure your order",
    home_products_heading: "Products",
    home_why_heading: "Why teams choose us",
    home_why_points: &[
        "Dedicated IPs from tier-1 carriers",
        "Unlimited concurrent sessions on static plans",
        "Pay with 100+ cryptocurrencies",
        "Support that answers within the hour",
    ],
    home_view_plans: "View plans",
    home_from: "from",

    pricing_title: "Pricing",
    pricing_lead: "Simple monthly pricing. No hidden fees, cancel any time.",
    pricing_order_button: "Order",
    pricing_per_gb: "per GB",

    order_title: "Configure your order",
    order_service: "Service",
    order_category: "Plan type",
    order_tier: "Plan",
    order_location: "Location",
    order_quantity: "Quantity",
    order_period: "Billing period",
    order_recalculate: "Update total",
    order_summary: "Order summary",
    order_unit_price: "Unit price",
    order_total: "Total",
    order_pay: "Pay with crypto",
    order_pay_note: "You will be redirected to our payment partner to complete the purchase.",
    order_contact_sales: "This plan is priced individually. Contact sales to get a quote.",
    order_trial_note: "Trial plans run for 7 days and cannot be extended.",

    checkout_failed: "We could not create your invoice. Please try again in a moment.",
    checkout_unavailable: "Online payment is temporarily unavailable.",

    success_title: "Thank you!",
    success_body: "Your payment is being confirmed. Proxy credentials will be emailed as soon as the transaction settles.",
    success_back: "Back to home",
};

pub static RU: Messages = Messages {
    brand: "ProxyForge",
    nav_home: "Главная",
    nav_pricing: "Цены",
    nav_order: "Заказ",
    footer_terms: "Условия использования",
    footer_privacy: "Политика конфиденциальности",
    footer_refund: "Политика возврата",
    footer_rights: "Все права защищены.",

    home_title: "Быстрые и чистые прокси для серьёзных задач",
    home_lead: "Статические ISP, IPv6 и ротационные резидентные прокси с мгновенной выдачей и оплатой криптовалютой.",
    home_cta: "Собрать заказ",
    home_products_heading: "Продукты",
    home_why_heading: "Почему выбирают нас",
    home_why_points: &[
        "Выделенные IP от операторов первого уровня",
        "Неограниченное число сессий на статических тарифах",
        "Оплата более чем 100 криптовалютами",
        "Поддержка отвечает в течение часа",
    ],
    home_view_plans: "Смотреть тарифы",
    home_from: "от",

    pricing_title: "Цены",
    pricing_lead: "Простые ежемесячные тарифы. Без скрытых платежей, отмена в любой момент.",
    pricing_order_button: "Заказать",
    pricing_per_gb: "за ГБ",

    order_title: "Оформление заказа",
    order_service: "Услуга",
    order_category: "Тип тарифа",
    order_tier: "Тариф",
    order_location: "Локация",
    order_quantity: "Количество",
    order_period: "Срок",
    order_recalculate: "Пересчитать",
    order_summary: "Ваш заказ",
    order_unit_price: "Цена за единицу",
    order_total: "Итого",
    order_pay: "Оплатить криптовалютой",
    order_pay_note: "Вы будете перенаправлены к платёжному партнёру для завершения покупки.",
    order_contact_sales: "Стоимость этого тарифа рассчитывается индивидуально. Свяжитесь с отделом продаж.",
    order_trial_note: "Пробный тариф действует 7 дней и не продлевается.",

    checkout_failed: "Не удалось создать счёт. Попробуйте ещё раз через минуту.",
    checkout_unavailable: "Онлайн-оплата временно недоступна.",

    success_title: "Спасибо!",
    success_body: "Платёж подтверждается. Данные для доступа придут на почту сразу после зачисления транзакции.",
    success_back: "На главную",
};
