//! Static object-type → display-icon lookup for the related-records panel.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

/// Icon used when an object type has no dedicated entry.
pub const DEFAULT_ICON: &str = "standard:default";

/// Resolve the display icon for an object type name. Lookup is
/// case-insensitive and never fails; unknown types get [`DEFAULT_ICON`].
pub fn resolve(object_type: &str) -> &'static str {
    match object_type.to_ascii_lowercase().as_str() {
        "account" => "standard:account",
        "address" => "standard:address",
        "announcement" => "standard:announcement",
        "apps" => "standard:apps",
        "approval" => "standard:approval",
        "article" => "standard:article",
        "asset_relationship" => "standard:asset_relationship",
        "assignment" => "standard:assignment",
        "avatar" => "standard:avatar",
        "brand" => "standard:brand",
        "calibration" => "standard:calibration",
        "call" => "standard:call",
        "campaign" => "standard:campaign",
        "case" => "standard:case",
        "case_comment" => "standard:case_comment",
        "channel_programs" => "standard:channel_programs",
        "client" => "standard:client",
        "coaching" => "standard:coaching",
        "contact" => "standard:contact",
        "contract" => "standard:contract",
        "currency" => "standard:currency",
        "custom" => "standard:custom",
        "customers" => "standard:customers",
        "dashboard" => "standard:dashboard",
        "document" => "standard:document",
        "drafts" => "standard:drafts",
        "email" => "standard:email",
        "entitlement" => "standard:entitlement",
        "event" => "standard:event",
        "feed" => "standard:feed",
        "feedback" => "standard:feedback",
        "file" => "standard:file",
        "folder" => "standard:folder",
        "forecasts" => "standard:forecasts",
        "goals" => "standard:goals",
        "groups" => "standard:groups",
        "hierarchy" => "standard:hierarchy",
        "home" => "standard:home",
        "household" => "standard:household",
        "individual" => "standard:individual",
        "insights" => "standard:insights",
        "kanban" => "standard:kanban",
        "knowledge" => "standard:knowledge",
        "lead" => "standard:lead",
        "link" => "standard:link",
        "location" => "standard:location",
        "macros" => "standard:macros",
        "merge" => "standard:merge",
        "metrics" => "standard:metrics",
        "news" => "standard:news",
        "note" => "standard:note",
        "opportunity" => "standard:opportunity",
        "orders" => "standard:orders",
        "partners" => "standard:partners",
        "people" => "standard:people",
        "performance" => "standard:performance",
        "photo" => "standard:photo",
        "poll" => "standard:poll",
        "portal" => "standard:portal",
        "post" => "standard:post",
        "pricebook" => "standard:pricebook",
        "process" => "standard:process",
        "product" => "standard:product",
        "queue" => "standard:queue",
        "quotes" => "standard:quotes",
        "recent" => "standard:recent",
        "record" => "standard:record",
        "related_list" => "standard:related_list",
        "relationship" => "standard:relationship",
        "report" => "standard:report",
        "reward" => "standard:reward",
        "search" => "standard:search",
        "service_appointment" => "standard:service_appointment",
        "service_contract" => "standard:service_contract",
        "service_report" => "standard:service_report",
        "shipment" => "standard:shipment",
        "skill" => "standard:skill",
        "sms" => "standard:sms",
        "social" => "standard:social",
        "solution" => "standard:solution",
        "sort" => "standard:sort",
        "stage" => "standard:stage",
        "steps" => "standard:steps",
        "strategy" => "standard:strategy",
        "survey" => "standard:survey",
        "task" => "standard:task",
        "team_member" => "standard:team_member",
        "template" => "standard:template",
        "text" => "standard:text",
        "thanks" => "standard:thanks",
        "timesheet" => "standard:timesheet",
        "today" => "standard:today",
        "topic" => "standard:topic",
        "user" => "standard:user",
        "user_role" => "standard:user_role",
        "visits" => "standard:visits",
        "work_order" => "standard:work_order",
        "work_queue" => "standard:work_queue",
        "work_type" => "standard:work_type",
        _ => DEFAULT_ICON,
    }
}
